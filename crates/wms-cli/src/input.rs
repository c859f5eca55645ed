//! Input and output path handling.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use wms_core::Pipeline;

/// True when the path has a `.csv` extension (case-insensitive).
pub fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Checks that an input path names a CSV file.
pub fn ensure_csv_input(path: &Path) -> Result<()> {
    if !is_csv_path(path) {
        bail!("unsupported input {}: only .csv files are accepted", path.display());
    }
    Ok(())
}

/// Explicit output path, or `processed_<name>` next to the input.
pub fn output_path_for(input: &Path, output: Option<&Path>) -> PathBuf {
    output.map_or_else(|| Pipeline::default_output_path(input), Path::to_path_buf)
}
