//! Content-Model Code Generator
//!
//! This library generates strongly-typed data-access code from a content-model
//! schema. For every content type it emits a fields interface, an entry
//! interface, a type-guard predicate, and a wrapper class with typed
//! accessors, plus an aggregate index module with a runtime dispatch function.
//!
//! ## Architecture
//!
//! The generator uses a three-stage pipeline:
//! 1. **Schema**: typed content-model definitions (the `quill-schema` crate)
//! 2. **IR (Intermediate Representation)**: naming, per-unit registries, units
//! 3. **Generators**: language-specific code generation
//!
//! Each content type's unit is generated independently with its own context;
//! only the final aggregation step looks across units.

pub mod error;
pub mod generators;
pub mod ir;
pub mod utils;

use std::path::Path;

pub use error::{CodegenError, Result};

use generators::typescript::{TypeScriptGenerator, TypeScriptOutput};
use generators::{Generator, GeneratorConfig};
use quill_schema::Schema;

/// Main entry point for code generation
pub struct CodeGenerator {
    schema: Schema,
}

impl CodeGenerator {
    /// Create a new code generator from a loaded schema
    pub fn from_schema(schema: Schema) -> Self {
        Self { schema }
    }

    /// Create a new code generator from a schema JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_schema(quill_schema::parse_schema(json)?))
    }

    /// Get the schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Generate code for a specific language
    pub fn generate<G: Generator>(&self, generator: G) -> Result<G::Output> {
        generator.generate(&self.schema)
    }
}

/// Convenience helper to run the TypeScript generator on a schema file and
/// write the generated modules to `output_dir`.
///
/// Returns the number of generated modules.
pub fn generate_typescript_from_file(
    schema_path: &Path,
    output_dir: &Path,
    config: GeneratorConfig,
) -> Result<usize> {
    let schema = quill_schema::load_schema(schema_path)?;
    let output = generate_typescript(&schema, config)?;
    utils::write_modules(output_dir, &output.modules)?;
    Ok(output.modules.len())
}

/// Runs the TypeScript generator over an already-loaded schema.
pub fn generate_typescript(schema: &Schema, config: GeneratorConfig) -> Result<TypeScriptOutput> {
    let generator = TypeScriptGenerator::new(config);
    generator.generate(schema)
}
