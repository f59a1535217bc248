//! Server-side domain models and parameter types.
//!
//! Parameter types are built from request DTOs at the controller boundary, validating
//! and normalizing input before the service layer sees it. Entity models are converted
//! to response DTOs here as well.

pub mod city;
pub mod complaint;
pub mod department;
pub mod zone;

use crate::server::error::validation::ValidationError;

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn require_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(trimmed.to_string())
}

/// Like [`require_text`] for optional fields; `None` stays `None`.
pub(crate) fn optional_text(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    value.map(|v| require_text(field, v)).transpose()
}
