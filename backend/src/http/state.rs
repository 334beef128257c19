//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::{InfoSettings, ServiceConfig, DEFAULT_FALLBACK_FACT, DEFAULT_MAX_MAGNITUDE};
use crate::facts::FactLookup;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of fun facts
    pub facts: Arc<dyn FactLookup>,
    /// Text used when the fact source is unavailable; `None` reports an error instead
    pub fallback_fact: Option<Arc<str>>,
    /// Contact details for the service info endpoint
    pub info: Arc<InfoSettings>,
    /// Largest absolute value the classifier accepts
    pub max_magnitude: u64,
}

impl AppState {
    /// Create a new application state with the default fallback text and empty contact details.
    pub fn new(facts: Arc<dyn FactLookup>) -> Self {
        Self {
            facts,
            fallback_fact: Some(Arc::from(DEFAULT_FALLBACK_FACT)),
            info: Arc::new(InfoSettings::default()),
            max_magnitude: DEFAULT_MAX_MAGNITUDE,
        }
    }

    /// Create application state from loaded configuration.
    pub fn from_config(config: &ServiceConfig, facts: Arc<dyn FactLookup>) -> Self {
        Self {
            facts,
            fallback_fact: config.facts.fallback_fact.as_deref().map(Arc::from),
            info: Arc::new(config.info.clone()),
            max_magnitude: config.server.max_magnitude,
        }
    }

    pub fn with_fallback(mut self, fallback: Option<&str>) -> Self {
        self.fallback_fact = fallback.map(Arc::from);
        self
    }

    pub fn with_max_magnitude(mut self, max_magnitude: u64) -> Self {
        self.max_magnitude = max_magnitude;
        self
    }

    pub fn with_info(mut self, info: InfoSettings) -> Self {
        self.info = Arc::new(info);
        self
    }
}
