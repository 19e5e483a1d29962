//! Content-Model Schema
//!
//! Typed representation of an exported content-model schema document, plus
//! JSON loading. The schema is the input to code generation: a set of named
//! content types, each with typed fields and optional link/reference
//! constraints.

pub mod error;
pub mod types;

use std::fs;
use std::path::Path;

pub use error::{Error, Result};
pub use types::{
    ContentType, ContentTypeSys, FieldDefinition, FieldType, ItemsDefinition, LinkType, Schema,
    Validation,
};

/// Parses a schema document from a JSON string.
pub fn parse_schema(json: &str) -> Result<Schema> {
    Ok(serde_json::from_str(json)?)
}

/// Loads a schema document from a JSON file.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let contents = fs::read_to_string(path)?;
    parse_schema(&contents)
}
