//! Generation backend traits.

use async_trait::async_trait;
use daihon_core::{GenerateRequest, GenerateResponse};
use daihon_error::{CredentialError, CredentialErrorKind, DaihonError, DaihonResult};
use tracing::{debug, instrument, warn};

/// Prompt sent by [`TextGenerator::verify`].
pub const VERIFY_PROMPT: &str = "こんにちは。接続確認です。「OK」とだけ返してください。";

/// A connected text generation backend.
///
/// Implementations perform exactly one remote call per [`generate`] and never
/// retry; retry policy belongs to the caller.
///
/// [`generate`]: TextGenerator::generate
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the generated text with any reported usage.
    async fn generate(&self, request: &GenerateRequest) -> DaihonResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;

    /// Make a small trial call to confirm the credential works.
    ///
    /// Any failure of the trial call is reported as a rejected credential.
    #[instrument(skip(self), fields(provider = self.provider_name(), model = self.model_name()))]
    async fn verify(&self) -> DaihonResult<()> {
        debug!("Verifying credential with a trial call");
        match self.generate(&GenerateRequest::from_prompt(VERIFY_PROMPT)).await {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!(error = %e, "Trial call failed");
                Err(CredentialError::new(CredentialErrorKind::Rejected(rejection_reason(&e))).into())
            }
        }
    }
}

/// Builds generators from an API key.
///
/// The session keeps at most one generator and asks the factory for a new one
/// only when the key changes.
pub trait GeneratorFactory: Send + Sync {
    /// Generator produced by this factory.
    type Generator: TextGenerator;

    /// Build a generator bound to `credential`.
    ///
    /// Implementations must not make network calls here; use
    /// [`TextGenerator::verify`] for that.
    fn connect(&self, credential: &str) -> DaihonResult<Self::Generator>;
}

fn rejection_reason(error: &DaihonError) -> String {
    match error.kind() {
        daihon_error::DaihonErrorKind::Invocation(inv) => inv.kind.to_string(),
        other => other.to_string(),
    }
}
