//! Credential errors.

/// Why the API credential cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CredentialErrorKind {
    /// No API key has been supplied
    #[display("API key not set")]
    Missing,
    /// The trial call made with the key failed
    #[display("API key rejected: {}", _0)]
    Rejected(String),
}

/// Credential error with source location tracking.
///
/// Surfaced as soon as the key is entered and blocks every generation action
/// until a usable key is supplied.
///
/// # Examples
///
/// ```
/// use daihon_error::{CredentialError, CredentialErrorKind};
///
/// let err = CredentialError::new(CredentialErrorKind::Missing);
/// assert!(format!("{}", err).contains("API key not set"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Credential Error: {} at line {} in {}", kind, line, file)]
pub struct CredentialError {
    /// The kind of error that occurred
    pub kind: CredentialErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CredentialError {
    /// Create a new CredentialError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CredentialErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
