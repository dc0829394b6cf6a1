//! Error types for mfq operations.
//!
//! Only loading can fail. Queries and resolvers report missing or ambiguous
//! data as `None`.

use thiserror::Error;

/// Errors that can occur while loading parser output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a microformats document: top level is neither an item nor a collection")]
    NotADocument,
}

pub type Result<T> = std::result::Result<T, Error>;
