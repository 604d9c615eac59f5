use thiserror::Error;

/// Errors that can occur during document construction or rendering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FacturierError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Document number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// PDF composition error.
    #[error("render error: {0}")]
    Render(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[2].description").
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

/// Join a list of validation errors into a single `FacturierError`.
pub(crate) fn validation_failure(errors: &[ValidationError]) -> FacturierError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    FacturierError::Validation(msg)
}
