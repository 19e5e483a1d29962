//! Command-line driver for the content-model code generator.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quill_codegen::generators::GeneratorConfig;

/// Generate TypeScript data-access code from a content-model schema.
#[derive(Debug, Parser)]
#[command(name = "quill", version, about)]
struct Cli {
    /// Path to the exported content-model schema JSON
    #[arg(long, default_value = "contentful-schema.json")]
    schema_file: PathBuf,

    /// Directory the generated modules are written to
    #[arg(long, default_value = "generated")]
    out_dir: PathBuf,

    /// Skip documentation comments in generated code
    #[arg(long)]
    no_docs: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = GeneratorConfig {
        generate_docs: !cli.no_docs,
    };

    let count =
        quill_codegen::generate_typescript_from_file(&cli.schema_file, &cli.out_dir, config)
            .with_context(|| format!("generating from {}", cli.schema_file.display()))?;

    println!("Generated {} modules in {}", count, cli.out_dir.display());
    Ok(())
}
