//! Code generators for different target languages
//!
//! Each target language has its own module that implements the `Generator`
//! trait over the parsed schema.

pub mod typescript;

use crate::error::Result;
use quill_schema::Schema;

/// Trait that all language generators must implement
pub trait Generator {
    /// The output type of this generator
    type Output;

    /// Generate code from the schema
    fn generate(&self, schema: &Schema) -> Result<Self::Output>;
}

/// Configuration options for code generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Whether to generate documentation comments
    pub generate_docs: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_docs: true,
        }
    }
}
