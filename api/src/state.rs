use shared::{TranslatorRegistry, Validator};
use std::sync::Arc;

use crate::config::AppConfig;

/// Application state shared across handlers. Built once, never mutated.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<TranslatorRegistry>,
    pub validator: Arc<Validator>,
}

impl AppState {
    pub fn new(registry: TranslatorRegistry, validator: Validator) -> Self {
        Self {
            registry: Arc::new(registry),
            validator: Arc::new(validator),
        }
    }

    /// Bundled pt_BR and en catalogs, pt_BR as the default locale.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            TranslatorRegistry::default(),
            Validator::with_field_naming(config.field_naming),
        )
    }
}
