use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use ctxprompt_cli::config::{FilesArgs, InputPaths};
use ctxprompt_cli::{pipeline, sink, telemetry};
use tracing::info;

fn main() -> Result<()> {
    telemetry::init();

    let args = FilesArgs::parse();
    let paths = InputPaths::resolve(&args.layout)?;
    info!("manifest format: {}", args.manifest_format);

    let document = pipeline::build_files_document(&args.instructions, &paths, args.manifest_format)
        .context("build context document")?;

    sink::write_document(&paths.output_dir, sink::FILES_PREFIX, &document, Local::now())?;
    sink::emit(&document, &mut std::io::stdout().lock()).context("write document to stdout")?;
    Ok(())
}
