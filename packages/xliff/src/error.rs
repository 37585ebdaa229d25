//! Error types for the XLIFF export.

use thiserror::Error;

/// Errors raised while decoding what the host hands over.
///
/// The export itself cannot fail once the input is typed.
#[derive(Error, Debug)]
pub enum XliffError {
    #[error("invalid documentation input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid export options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, XliffError>;
