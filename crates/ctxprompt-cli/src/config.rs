use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser};
use ctxprompt_core::ManifestFormat;

/// Where inputs are read from and the output is written to.
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Directory holding generic-instructions.md, prompt-context-files.txt
    /// and terminal-output.txt. Defaults to `input/` one level above the executable.
    #[arg(long, env = "CTXPROMPT_INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving generated prompts. Defaults to `output/` one level
    /// above the executable.
    #[arg(long, env = "CTXPROMPT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[command(
    name = "ctxprompt-files",
    about = "Generate a Markdown prompt including context from full file paths"
)]
pub struct FilesArgs {
    /// The specific request or question for the prompt.
    #[arg(long, value_name = "\"Your Question/Request\"")]
    pub instructions: String,

    /// How manifest lines map to paths: direct, base-prefixed or auto.
    #[arg(long, default_value = "direct", value_parser = parse_manifest_format)]
    pub manifest_format: ManifestFormat,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

#[derive(Debug, Parser)]
#[command(
    name = "ctxprompt-diff",
    about = "Generate a Markdown prompt including git diff context"
)]
pub struct DiffArgs {
    /// The specific request or question for the prompt.
    #[arg(long)]
    pub instructions: String,

    /// Path to the git repository.
    #[arg(long)]
    pub repo: PathBuf,

    /// The name of the main branch.
    #[arg(long, default_value = "main")]
    pub main_branch: String,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

fn parse_manifest_format(s: &str) -> Result<ManifestFormat, String> {
    ManifestFormat::parse_str(s)
        .ok_or_else(|| format!("unknown manifest format '{s}' (expected direct, base-prefixed or auto)"))
}

/// Resolved locations of every fixed input and the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    pub generic_instructions: PathBuf,
    pub manifest: PathBuf,
    pub terminal_output: PathBuf,
    pub output_dir: PathBuf,
}

impl InputPaths {
    pub fn new(input_dir: &Path, output_dir: &Path) -> Self {
        Self {
            generic_instructions: input_dir.join("generic-instructions.md"),
            manifest: input_dir.join("prompt-context-files.txt"),
            terminal_output: input_dir.join("terminal-output.txt"),
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Apply overrides, falling back to `input/` and `output/` under `tool_root`.
    pub fn from_layout(layout: &LayoutArgs, tool_root: &Path) -> Self {
        let input = layout
            .input_dir
            .clone()
            .unwrap_or_else(|| tool_root.join("input"));
        let output = layout
            .output_dir
            .clone()
            .unwrap_or_else(|| tool_root.join("output"));
        Self::new(&input, &output)
    }

    /// Resolve using the running executable's location as the tool root.
    pub fn resolve(layout: &LayoutArgs) -> Result<Self> {
        let root = tool_root()?;
        Ok(Self::from_layout(layout, &root))
    }
}

/// One level above the directory holding the executable.
pub fn tool_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate current executable")?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| anyhow::anyhow!("executable path has no parent: {}", exe.display()))?;
    Ok(exe_dir.join(".."))
}
