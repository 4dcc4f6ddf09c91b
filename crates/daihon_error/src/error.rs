//! Top-level error wrapper types.

use crate::{ConfigError, CredentialError, ExportError, InvocationError, MissingInputError};

/// Every error condition daihon can report.
///
/// # Examples
///
/// ```
/// use daihon_error::{DaihonError, ConfigError};
///
/// let err: DaihonError = ConfigError::new("bad toml").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum DaihonErrorKind {
    /// Missing or rejected API key
    #[from(CredentialError)]
    Credential(CredentialError),
    /// Remote generation call failed
    #[from(InvocationError)]
    Invocation(InvocationError),
    /// Required user input missing
    #[from(MissingInputError)]
    MissingInput(MissingInputError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Export to disk failed
    #[from(ExportError)]
    Export(ExportError),
}

/// daihon error with kind discrimination.
///
/// # Examples
///
/// ```
/// use daihon_error::{DaihonErrorKind, DaihonResult, CredentialError, CredentialErrorKind};
///
/// fn connect() -> DaihonResult<()> {
///     Err(CredentialError::new(CredentialErrorKind::Missing))?
/// }
///
/// let err = connect().unwrap_err();
/// assert!(matches!(err.kind(), DaihonErrorKind::Credential(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Daihon Error: {}", _0)]
pub struct DaihonError(Box<DaihonErrorKind>);

impl DaihonError {
    /// Create a new error from a kind.
    pub fn new(kind: DaihonErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DaihonErrorKind {
        &self.0
    }

    /// Whether this error is a credential problem.
    pub fn is_credential(&self) -> bool {
        matches!(self.kind(), DaihonErrorKind::Credential(_))
    }

    /// Whether this error was raised before any call because of bad input.
    pub fn is_missing_input(&self) -> bool {
        matches!(self.kind(), DaihonErrorKind::MissingInput(_))
    }

    /// Whether this error came from the remote generation call.
    pub fn is_invocation(&self) -> bool {
        matches!(self.kind(), DaihonErrorKind::Invocation(_))
    }
}

// Generic From implementation for any type that converts to DaihonErrorKind
impl<T> From<T> for DaihonError
where
    T: Into<DaihonErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for daihon operations.
pub type DaihonResult<T> = std::result::Result<T, DaihonError>;
