use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use ctxprompt_core::CoreError;
use tracing::info;

/// File name prefix for each document kind.
pub const FILES_PREFIX: &str = "prompt";
pub const DIFF_PREFIX: &str = "prompt_diff";

/// `<dir>/<prefix>_<YYYYMMDD_HHMMSS>.md`
pub fn output_path(dir: &Path, prefix: &str, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("{prefix}_{}.md", now.format("%Y%m%d_%H%M%S")))
}

/// Create the output directory if needed and write the document to a fresh
/// timestamped file. Returns the file written.
pub fn write_document(
    dir: &Path,
    prefix: &str,
    document: &str,
    now: DateTime<Local>,
) -> Result<PathBuf, CoreError> {
    fs::create_dir_all(dir).map_err(|source| CoreError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!("ensured output directory exists: '{}'", dir.display());

    let path = output_path(dir, prefix, now);
    info!("output will be saved to: '{}'", path.display());
    fs::write(&path, document).map_err(|source| CoreError::OutputWrite {
        path: path.clone(),
        source,
    })?;
    info!("wrote prompt to {}", path.display());
    Ok(path)
}

/// Write the document to `out` (stdout in the binaries) so it can be piped.
pub fn emit(document: &str, out: &mut impl Write) -> std::io::Result<()> {
    out.write_all(document.as_bytes())?;
    out.flush()
}
