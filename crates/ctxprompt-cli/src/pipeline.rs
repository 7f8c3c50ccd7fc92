use std::path::Path;

use ctxprompt_core::manifest::{load_context_files, read_manifest};
use ctxprompt_core::{load_file, CoreError, FileContent, ManifestFormat};
use ctxprompt_prompts::{assemble_document, DocumentContext, Supplement};
use tracing::{error, info};

use crate::config::InputPaths;
use crate::git::{resolve_diff, Vcs};

pub const GENERIC_INSTRUCTIONS_UNAVAILABLE: &str =
    "[Could not load required generic instructions file]";

/// Load the generic instructions, degrading to a placeholder when they are
/// missing, empty or unreadable.
pub fn load_generic_instructions(path: &Path) -> String {
    info!("reading generic instructions from '{}'", path.display());
    match load_file(path, false) {
        FileContent::Text(text) => text,
        FileContent::Placeholder(p) => {
            error!("{p}");
            GENERIC_INSTRUCTIONS_UNAVAILABLE.to_string()
        }
    }
}

/// Load the optional terminal capture. Only real read failures are logged.
pub fn load_terminal_output(path: &Path) -> FileContent {
    info!("reading optional terminal output from '{}'", path.display());
    let content = load_file(path, true);
    if let Some(p) = content.placeholder().filter(|p| p.is_error()) {
        error!("{p}");
    }
    content
}

/// Build the path-list document from the manifest and fixed inputs.
pub fn build_files_document(
    request: &str,
    paths: &InputPaths,
    format: ManifestFormat,
) -> Result<String, CoreError> {
    let generic_instructions = load_generic_instructions(&paths.generic_instructions);
    let terminal_output = load_terminal_output(&paths.terminal_output);

    let entries = read_manifest(&paths.manifest, format)?;
    info!("reading {} context files", entries.len());
    let files = load_context_files(&entries);

    let ctx = DocumentContext {
        basic_request: request.to_string(),
        generic_instructions,
        supplement: Supplement::TerminalOutput(terminal_output),
        files,
    };
    Ok(assemble_document(&ctx))
}

/// Build the diff document for the current branch against `baseline`.
pub fn build_diff_document(
    request: &str,
    paths: &InputPaths,
    vcs: &dyn Vcs,
    baseline: &str,
) -> Result<String, CoreError> {
    let generic_instructions = load_generic_instructions(&paths.generic_instructions);
    let record = resolve_diff(vcs, baseline)?;

    let ctx = DocumentContext {
        basic_request: request.to_string(),
        generic_instructions,
        supplement: Supplement::GitDiff(record),
        files: Vec::new(),
    };
    Ok(assemble_document(&ctx))
}
