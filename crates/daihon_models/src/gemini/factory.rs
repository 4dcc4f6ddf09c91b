//! Builds Gemini clients from user-entered keys.

use crate::{GeminiClient, GeminiConfig};
use daihon_error::DaihonResult;
use daihon_interface::GeneratorFactory;
use tracing::instrument;

/// [`GeneratorFactory`] producing [`GeminiClient`]s that share one config.
#[derive(Debug, Clone, Default, derive_getters::Getters)]
pub struct GeminiFactory {
    /// Settings given to every client
    config: GeminiConfig,
}

impl GeminiFactory {
    /// Creates a factory.
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }
}

impl GeneratorFactory for GeminiFactory {
    type Generator = GeminiClient;

    #[instrument(skip(self, credential))]
    fn connect(&self, credential: &str) -> DaihonResult<GeminiClient> {
        GeminiClient::new(credential.trim(), self.config.clone())
    }
}
