//! Value objects - immutable types without identity

mod page;

pub use page::{Page, PageRequest};
