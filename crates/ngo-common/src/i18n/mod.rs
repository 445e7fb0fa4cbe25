//! Localized message catalog

mod locale;
mod message_source;

pub use locale::Locale;
pub use message_source::MessageSource;
