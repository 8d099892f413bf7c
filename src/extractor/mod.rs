pub mod matcher;
pub mod model;

pub use matcher::extract;
pub use model::FunctionInfo;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read `path` and extract the first declaration of `function_name`.
///
/// `Ok(None)` means the file was read but contains no matching
/// declaration; read failures surface as errors.
pub fn extract_from_file(path: &Path, function_name: &str) -> Result<Option<FunctionInfo>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    matcher::extract(&content, function_name)
}
