use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CodegenError, Result};

/// Write generated modules to the given output directory.
/// Creates the directory if it does not exist.
pub fn write_modules(output_dir: &Path, modules: &BTreeMap<String, String>) -> Result<()> {
    fs::create_dir_all(output_dir)?;

    for (filename, contents) in modules {
        let path = output_dir.join(filename);
        debug!(path = %path.display(), "writing generated module");
        fs::write(&path, contents).map_err(|source| CodegenError::WriteFile {
            path: path.clone(),
            source,
        })?;
    }

    Ok(())
}
