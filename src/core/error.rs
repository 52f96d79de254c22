use thiserror::Error;

/// Errors raised at construction and collaborator boundaries.
///
/// The calculations themselves never fail; see the resolver docs for how
/// out-of-range inputs are clamped or defaulted.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CostError {
    /// One or more input validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Reading or writing saved calculations failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// Saved calculations could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A single validation finding with field name and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the offending input field (e.g. "months").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collapse a list of findings into a single [`CostError::Validation`].
pub fn validation_failure(errors: &[ValidationError]) -> CostError {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    CostError::Validation(joined)
}
