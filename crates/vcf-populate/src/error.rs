//! Error types for the VCF populator.

use thiserror::Error;

/// Errors that can occur while writing VCF output.
#[derive(Error, Debug)]
pub enum VcfPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
