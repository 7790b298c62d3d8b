use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading a catalog, parsing criteria labels, or submitting posts.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid price: {0:?}")]
    InvalidPrice(String),
    #[error("duplicate course id: {0}")]
    DuplicateId(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),
    #[error("Please fill out all fields")]
    BlankPostField,
}
