//! Error types for code generation

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Schema error: {0}")]
    Schema(#[from] quill_schema::Error),

    #[error("Content type `{id}` is malformed: {reason}")]
    MalformedContentType { id: String, reason: String },

    #[error("Failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
