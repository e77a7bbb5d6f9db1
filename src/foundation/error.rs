/// Convenience result type used across Placard.
pub type PlacardResult<T> = Result<T, PlacardError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only structural failures surface here. Malformed colors metadata, unloadable fonts and
/// undecodable hex codes are absorbed where they occur and replaced with defaults.
#[derive(thiserror::Error, Debug)]
pub enum PlacardError {
    /// The department/material reference directory does not exist.
    #[error("reference directory not found: {0}")]
    NotFound(String),

    /// Invalid caller-provided settings or dimensions.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing text onto a surface.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlacardError {
    /// Build a [`PlacardError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`PlacardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlacardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// True for the missing-reference-directory failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
