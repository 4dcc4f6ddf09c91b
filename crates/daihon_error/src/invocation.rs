//! Errors raised by the remote generation call.

/// What went wrong while calling the generation API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InvocationErrorKind {
    /// Transport-level failure (DNS, TLS, connection reset, timeout)
    #[display("Request failed: {}", _0)]
    Request(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The response body could not be understood
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
    /// The response parsed but carried no text
    #[display("Response contained no text")]
    EmptyResponse,
}

impl InvocationErrorKind {
    /// Whether the failure came from the quota/rate limiter (HTTP 429).
    pub fn is_quota(&self) -> bool {
        matches!(self, InvocationErrorKind::Http { status_code: 429, .. })
    }

    /// Whether the API refused the credential (HTTP 401/403).
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            InvocationErrorKind::Http {
                status_code: 401 | 403,
                ..
            }
        )
    }
}

/// Invocation error with source location tracking.
///
/// # Examples
///
/// ```
/// use daihon_error::{InvocationError, InvocationErrorKind};
///
/// let err = InvocationError::new(InvocationErrorKind::Http {
///     status_code: 429,
///     message: "Resource has been exhausted".to_string(),
/// });
/// assert!(err.kind.is_quota());
/// assert!(format!("{}", err).contains("HTTP 429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invocation Error: {} at line {} in {}", kind, line, file)]
pub struct InvocationError {
    /// The kind of error that occurred
    pub kind: InvocationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InvocationError {
    /// Create a new InvocationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InvocationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
