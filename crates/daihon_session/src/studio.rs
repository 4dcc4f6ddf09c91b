//! Session orchestration: credential, client handle and state.

use crate::{GenerationSettings, Notice, SessionState, export_current, invoke};
use daihon_core::{Feature, FeatureParams, GenerationRecord, ParameterRecord, TextStats};
use daihon_error::{
    CredentialError, CredentialErrorKind, DaihonResult, MissingInputError, MissingInputErrorKind,
};
use daihon_interface::{GeneratorFactory, TextGenerator};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// One interactive session.
///
/// The generator handle is built lazily from the first usable credential and
/// rebuilt only when the credential changes. Every generation requires a
/// verified handle.
pub struct Studio<F: GeneratorFactory> {
    factory: F,
    settings: GenerationSettings,
    credential: Option<String>,
    generator: Option<F::Generator>,
    state: SessionState,
}

impl<F: GeneratorFactory> std::fmt::Debug for Studio<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("settings", &self.settings)
            .field("has_credential", &self.credential.is_some())
            .field("connected", &self.generator.is_some())
            .field("state", &self.state)
            .finish()
    }
}

impl<F: GeneratorFactory> Studio<F> {
    /// New session with empty state and no credential.
    pub fn new(factory: F, settings: GenerationSettings) -> Self {
        Self {
            factory,
            settings,
            credential: None,
            generator: None,
            state: SessionState::new(),
        }
    }

    /// Session state, read-only.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Factory used to build generator handles.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Request settings applied to every call.
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Whether a verified generator is available.
    pub fn is_connected(&self) -> bool {
        self.generator.is_some()
    }

    /// The connected generator, if any.
    pub fn generator(&self) -> Option<&F::Generator> {
        self.generator.as_ref()
    }

    /// Supply the API key.
    ///
    /// An unchanged key with a live handle is a no-op. A changed key drops
    /// the old handle, builds a new one and verifies it with one trial call.
    ///
    /// # Errors
    ///
    /// `CredentialError::Missing` for a blank key, `CredentialError::Rejected`
    /// when the trial call fails. Either way no handle remains.
    #[instrument(skip(self, secret))]
    pub async fn set_credential(&mut self, secret: &str) -> DaihonResult<()> {
        let secret = secret.trim();
        if secret.is_empty() {
            debug!("Blank credential; disconnecting");
            self.credential = None;
            self.generator = None;
            return Err(CredentialError::new(CredentialErrorKind::Missing).into());
        }

        if self.credential.as_deref() == Some(secret) && self.generator.is_some() {
            debug!("Credential unchanged; keeping existing handle");
            return Ok(());
        }

        self.credential = Some(secret.to_string());
        self.generator = None;

        let generator = self.factory.connect(secret)?;
        generator.verify().await?;
        info!(
            provider = generator.provider_name(),
            model = generator.model_name(),
            "API connection established"
        );
        self.generator = Some(generator);
        Ok(())
    }

    /// Validate, then run one generation.
    ///
    /// `label` defaults to the feature's label.
    ///
    /// # Errors
    ///
    /// `MissingInputError` for invalid input (no call, no state change),
    /// `CredentialError` without a verified handle, otherwise whatever
    /// [`invoke`] reports.
    pub async fn generate(
        &mut self,
        params: FeatureParams,
        label: Option<String>,
    ) -> DaihonResult<GenerationRecord> {
        daihon_prompts::validate(&params)?;
        let generator = require_handle(&self.generator, &self.credential)?;
        let label = label.unwrap_or_else(|| params.feature().label().to_string());
        invoke(generator, &mut self.state, &self.settings, params, label).await
    }

    /// Build typed parameters from a loose record, then [`generate`](Self::generate).
    pub async fn generate_from_record(
        &mut self,
        feature: Feature,
        record: &ParameterRecord,
    ) -> DaihonResult<GenerationRecord> {
        self.generate(FeatureParams::from_record(feature, record), None)
            .await
    }

    /// Run the last attempted generation again with identical parameters.
    ///
    /// # Errors
    ///
    /// `MissingInputError::NothingToReplay` when nothing was attempted yet;
    /// no call is made in that case.
    pub async fn regenerate(&mut self) -> DaihonResult<GenerationRecord> {
        let replay = self
            .state
            .replay()
            .cloned()
            .ok_or_else(|| MissingInputError::new(MissingInputErrorKind::NothingToReplay))?;
        let generator = require_handle(&self.generator, &self.credential)?;
        let (params, label) = (replay.params().clone(), replay.label().clone());
        invoke(generator, &mut self.state, &self.settings, params, label).await
    }

    /// Clear the current result; history stays.
    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Start over with empty state. The credential and handle are kept.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Write the current result to `dir`.
    pub fn export(&self, dir: &Path) -> DaihonResult<PathBuf> {
        export_current(&self.state, dir)
    }

    /// Statistics of the current result.
    pub fn stats(&self) -> Option<TextStats> {
        self.state.stats()
    }

    /// [`set_credential`](Self::set_credential) reported as a notice.
    pub async fn connect(&mut self, secret: &str) -> Notice {
        match self.set_credential(secret).await {
            Ok(()) => Notice::Success("API接続成功".to_string()),
            Err(e) => report(&e),
        }
    }

    /// [`generate`](Self::generate) reported as a notice.
    pub async fn submit(&mut self, params: FeatureParams, label: Option<String>) -> Notice {
        let feature = params.feature();
        match self.generate(params, label).await {
            Ok(_) => Notice::generated(feature),
            Err(e) => report(&e),
        }
    }

    /// [`regenerate`](Self::regenerate) reported as a notice.
    pub async fn resubmit(&mut self) -> Notice {
        match self.regenerate().await {
            Ok(_) => Notice::regenerated(),
            Err(e) => report(&e),
        }
    }

    /// [`export`](Self::export) reported as a notice.
    pub fn save(&self, dir: &Path) -> Notice {
        match self.export(dir) {
            Ok(path) => Notice::Success(format!("保存しました: {}", path.display())),
            Err(e) => report(&e),
        }
    }
}

/// Advice shown before a plot generation with no input at all.
pub fn input_hint(params: &FeatureParams) -> Option<Notice> {
    match params {
        FeatureParams::Plot(p)
            if p.genre.is_none()
                && p.title.is_none()
                && p.protagonist.is_none()
                && p.worldview.is_none()
                && p.theme.is_none()
                && p.existing_plot.is_none() =>
        {
            Some(Notice::Warning(
                "何らかの情報を入力すると、より精度の高いプロットが生成されます。".to_string(),
            ))
        }
        _ => None,
    }
}

fn report(error: &daihon_error::DaihonError) -> Notice {
    warn!(error = %error, "Studio action failed");
    Notice::from(error)
}

fn require_handle<'a, G>(
    generator: &'a Option<G>,
    credential: &Option<String>,
) -> DaihonResult<&'a G> {
    match (generator, credential) {
        (Some(generator), _) => Ok(generator),
        (None, None) => Err(CredentialError::new(CredentialErrorKind::Missing).into()),
        (None, Some(_)) => Err(CredentialError::new(CredentialErrorKind::Rejected(
            "credential has not been verified".to_string(),
        ))
        .into()),
    }
}
