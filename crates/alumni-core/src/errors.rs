//! Cross-cutting error types for the alumni directory.
//!
//! Store-specific errors (`StoreError`) live in `alumni-store`. The binary
//! folds everything into `anyhow` at the edge.

use thiserror::Error;

/// Errors that can be raised before any store is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required field was blank after trimming.
    #[error("Validation error: {0}")]
    Validation(String),
}
