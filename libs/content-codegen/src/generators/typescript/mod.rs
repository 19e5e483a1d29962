//! TypeScript code generator for content-model schemas

mod index;
mod writer;

use std::collections::BTreeMap;

use quill_schema::Schema;
use tracing::debug;

use crate::error::Result;
use crate::generators::{Generator, GeneratorConfig};
use crate::ir::{Directory, GeneratedUnit};

pub use writer::ContentTypeWriter;

/// Output of the TypeScript generator
#[derive(Debug)]
pub struct TypeScriptOutput {
    /// Generated modules indexed by file name, in deterministic order
    pub modules: BTreeMap<String, String>,
    /// Directory of all generated units, in schema order
    pub directory: Directory,
}

/// TypeScript code generator
pub struct TypeScriptGenerator {
    config: GeneratorConfig,
}

impl TypeScriptGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn new_default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator for TypeScriptGenerator {
    type Output = TypeScriptOutput;

    fn generate(&self, schema: &Schema) -> Result<Self::Output> {
        let mut units: Vec<GeneratedUnit> = Vec::with_capacity(schema.content_types.len());
        for content_type in &schema.content_types {
            debug!(content_type = content_type.id(), "generating declaration unit");
            units.push(ContentTypeWriter::new(content_type, &self.config).write()?);
        }

        let directory = Directory::from_units(&units);

        let mut modules = BTreeMap::new();
        modules.insert(
            "index.ts".to_string(),
            index::generate_index(&units, &directory),
        );
        for unit in units {
            modules.insert(format!("{}.ts", unit.file_stem), unit.code);
        }

        Ok(TypeScriptOutput { modules, directory })
    }
}
