//! Layered configuration.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (include_str! from daihon.toml)
//! 2. User config in home directory (~/.config/daihon/daihon.toml)
//! 3. User config in current directory (./daihon.toml)
//! 4. An explicit file given on the command line
//! 5. `DAIHON_<SECTION>__<KEY>` environment variables

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use daihon_error::{ConfigError, DaihonError, DaihonResult};
use daihon_models::GeminiConfig;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../daihon.toml");

/// Settings of the interactive session and the CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct SessionConfig {
    /// Entries shown by history listings
    history_preview: usize,
    /// Characters of each entry shown in history listings
    preview_chars: usize,
    /// Default export directory
    export_dir: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_preview: 5,
            preview_chars: 200,
            export_dir: PathBuf::from("."),
        }
    }
}

/// Top-level daihon configuration.
///
/// # Example
///
/// ```no_run
/// use daihon::DaihonConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DaihonConfig::load(None)?;
/// println!("model: {}", config.gemini().model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct DaihonConfig {
    /// Gemini client settings
    gemini: GeminiConfig,
    /// Session settings
    session: SessionConfig,
}

impl DaihonConfig {
    /// Load configuration from a single file, without defaults or overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> DaihonResult<Self> {
        debug!("Loading configuration from file");
        finish(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Load every configuration layer.
    ///
    /// Missing user files are skipped; a missing `explicit` file is an error.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> DaihonResult<Self> {
        debug!("Loading layered configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/daihon/daihon.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("daihon").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DAIHON")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        finish(builder)
    }
}

fn finish(builder: ConfigBuilder<DefaultState>) -> DaihonResult<DaihonConfig> {
    builder
        .build()
        .map_err(|e| {
            DaihonError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?
        .try_deserialize()
        .map_err(|e| {
            DaihonError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults_parse() {
        let config = finish(
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
        )
        .unwrap();
        assert_eq!(config, DaihonConfig::default());
        assert_eq!(*config.session().preview_chars(), 200);
        assert_eq!(*config.session().history_preview(), 5);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            "[gemini]\nmodel = \"gemini-1.5-pro\"\ntemperature = 0.4\n\n[session]\npreview_chars = 40\n",
        )
        .unwrap();

        let config = DaihonConfig::from_file(&path).unwrap();
        assert_eq!(config.gemini().model(), "gemini-1.5-pro");
        assert_eq!(*config.gemini().temperature(), Some(0.4));
        assert_eq!(*config.gemini().timeout_secs(), 120);
        assert_eq!(*config.session().preview_chars(), 40);
        assert_eq!(*config.session().history_preview(), 5);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = DaihonConfig::load(Some(Path::new("/nonexistent/daihon.toml"))).unwrap_err();
        assert!(matches!(err.kind(), daihon_error::DaihonErrorKind::Config(_)));
    }
}
