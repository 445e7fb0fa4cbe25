//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! configuration and the message catalog.

use std::sync::Arc;

use ngo_common::{AppConfig, MessageSource};
use ngo_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    messages: Arc<MessageSource>,
}

impl AppState {
    /// Create a new AppState
    ///
    /// The message catalog defaults to the configured locale.
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let messages = MessageSource::new(config.i18n.default_locale);

        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            messages: Arc::new(messages),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the localized message catalog
    pub fn messages(&self) -> &MessageSource {
        &self.messages
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("default_locale", &self.messages.default_locale())
            .finish()
    }
}
