use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use ctxprompt_cli::config::{DiffArgs, InputPaths};
use ctxprompt_cli::git::{validate_repo, GitCli};
use ctxprompt_cli::{pipeline, sink, telemetry};
use tracing::info;

fn main() -> Result<()> {
    telemetry::init();

    let args = DiffArgs::parse();
    let paths = InputPaths::resolve(&args.layout)?;

    let repo = validate_repo(&args.repo)?;
    info!("repository: {}", repo.display());

    let git = GitCli::new(repo.clone());
    let document =
        pipeline::build_diff_document(&args.instructions, &paths, &git, &args.main_branch)
            .context("build diff document")?;

    sink::write_document(&paths.output_dir, sink::DIFF_PREFIX, &document, Local::now())?;
    sink::emit(&document, &mut std::io::stdout().lock()).context("write document to stdout")?;
    Ok(())
}
