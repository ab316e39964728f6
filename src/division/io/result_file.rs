use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::division::error::{Result, ToolError};

/// Default location of the result file, relative to the working directory.
pub const RESULT_FILE: &str = "result.txt";

/// Renders the exact content persisted for `quotient`.
pub fn render(quotient: i32) -> String {
    format!("Division result: {quotient}")
}

/// Creates or truncates `path` and writes the rendered quotient into it.
#[instrument(level = "info", skip_all, fields(path = %path.display(), quotient = quotient))]
pub fn write_result(path: &Path, quotient: i32) -> Result<()> {
    fs::write(path, render(quotient)).map_err(|source| ToolError::ResultFile {
        path: path.to_path_buf(),
        source,
    })?;
    info!("result file written");
    Ok(())
}
