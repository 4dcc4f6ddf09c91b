//! Input validation errors.

/// Which user input is missing or unusable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MissingInputErrorKind {
    /// A required field was empty
    #[display("Required field '{}' is empty", field)]
    Empty {
        /// Field name as used in the parameter record
        field: &'static str,
    },
    /// A numeric field fell outside its accepted range
    #[display("Field '{}' must be between {} and {}, got {}", field, min, max, value)]
    OutOfRange {
        /// Field name as used in the parameter record
        field: &'static str,
        /// Inclusive lower bound
        min: i64,
        /// Inclusive upper bound
        max: i64,
        /// Value supplied
        value: i64,
    },
    /// Regenerate was requested before any generation
    #[display("No previous generation to replay")]
    NothingToReplay,
    /// Export was requested with no current result
    #[display("No generated content to export")]
    NothingToExport,
}

/// Missing input error with source location tracking.
///
/// Raised before the generation call, so no state is touched.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Missing Input: {} at line {} in {}", kind, line, file)]
pub struct MissingInputError {
    /// The kind of error that occurred
    pub kind: MissingInputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MissingInputError {
    /// Create a new MissingInputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MissingInputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
