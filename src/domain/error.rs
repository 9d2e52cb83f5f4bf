//! Pipeline error taxonomy.
//!
//! Every failure is tagged with the [`Stage`] it happened in. HTTP status
//! mapping lives in [`crate::error`], not here.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Pipeline stage, used to annotate failures in logs and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Extracting,
    Generating,
    Storing,
    Resolving,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Validating => "validating",
            Stage::Extracting => "extracting",
            Stage::Generating => "generating",
            Stage::Storing => "storing",
            Stage::Resolving => "resolving",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a keyword could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("completion request failed: {0}")]
    Upstream(String),

    #[error("completion request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("no completion returned")]
    NoCompletion,

    #[error("invalid keyword generated: {0:?}")]
    InvalidKeyword(String),
}

/// Errors surfaced by the shortening pipeline and the keyword store.
#[derive(Debug, Error)]
pub enum ShortenError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("page responded with status {status}")]
    Fetch { status: u16 },

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("keyword already exists: {0}")]
    DuplicateKey(String),

    #[error("keyword not found: {0}")]
    NotFound(String),

    #[error("storage error while {stage}: {message}")]
    Storage { stage: Stage, message: String },
}

impl ShortenError {
    /// The stage this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            ShortenError::InvalidInput(_) => Stage::Validating,
            ShortenError::Fetch { .. } => Stage::Extracting,
            ShortenError::Generation(_) => Stage::Generating,
            ShortenError::DuplicateKey(_) => Stage::Storing,
            ShortenError::NotFound(_) => Stage::Resolving,
            ShortenError::Storage { stage, .. } => *stage,
        }
    }

    /// Database failure during `stage`.
    pub fn storage(stage: Stage, e: impl ToString) -> Self {
        ShortenError::Storage {
            stage,
            message: e.to_string(),
        }
    }
}

/// Database errors default to the storing stage; read paths tag themselves
/// with [`ShortenError::storage`].
impl From<sqlx::Error> for ShortenError {
    fn from(e: sqlx::Error) -> Self {
        ShortenError::storage(Stage::Storing, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_for_each_variant() {
        assert_eq!(
            ShortenError::InvalidInput("x".into()).stage(),
            Stage::Validating
        );
        assert_eq!(
            ShortenError::Fetch { status: 500 }.stage(),
            Stage::Extracting
        );
        assert_eq!(
            ShortenError::from(GenerationError::NoCompletion).stage(),
            Stage::Generating
        );
        assert_eq!(
            ShortenError::DuplicateKey("sample".into()).stage(),
            Stage::Storing
        );
        assert_eq!(
            ShortenError::NotFound("sample".into()).stage(),
            Stage::Resolving
        );
    }

    #[test]
    fn test_storage_error_keeps_its_stage() {
        let err = ShortenError::storage(Stage::Resolving, "no such table: urls");
        assert_eq!(err.stage(), Stage::Resolving);
        assert_eq!(
            err.to_string(),
            "storage error while resolving: no such table: urls"
        );

        let err = ShortenError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.stage(), Stage::Storing);
    }

    #[test]
    fn test_generation_error_message() {
        let err = ShortenError::from(GenerationError::InvalidKeyword("two words".into()));
        assert_eq!(err.to_string(), "invalid keyword generated: \"two words\"");
    }
}
