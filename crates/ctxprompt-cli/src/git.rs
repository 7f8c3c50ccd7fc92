use std::path::{Path, PathBuf};
use std::process::Command;

use ctxprompt_core::{expand_tilde, CoreError, DiffContent, DiffRecord};
use tracing::{error, info};

/// The version-control queries the diff strategy needs.
pub trait Vcs {
    fn current_branch(&self) -> Result<String, CoreError>;

    /// Three-dot diff of `head` against the merge base with `base`.
    fn diff(&self, base: &str, head: &str) -> Result<String, CoreError>;
}

/// [`Vcs`] backed by the `git` executable, run against one repository.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo: PathBuf,
}

impl GitCli {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    fn run(&self, args: &[&str]) -> Result<String, CoreError> {
        let command = format!("git -C {} {}", self.repo.display(), args.join(" "));
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo)
            .args(args)
            .output()
            .map_err(|source| CoreError::GitSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!("error running git command: {command}");
            error!("{stderr}");
            return Err(CoreError::Git {
                command,
                status: output.status.code().unwrap_or(-1),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Vcs for GitCli {
    fn current_branch(&self) -> Result<String, CoreError> {
        self.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    fn diff(&self, base: &str, head: &str) -> Result<String, CoreError> {
        let range = format!("{base}...{head}");
        self.run(&["diff", range.as_str()])
    }
}

/// Expand `~`, make the path absolute and require a `.git` directory inside.
pub fn validate_repo(repo: &Path) -> Result<PathBuf, CoreError> {
    let expanded = expand_tilde(repo);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&expanded))
            .unwrap_or(expanded)
    };

    if !absolute.join(".git").is_dir() {
        return Err(CoreError::NotARepository(absolute));
    }
    Ok(absolute)
}

/// Diff the current branch against `baseline`. No diff is requested when the
/// current branch is the baseline.
pub fn resolve_diff(vcs: &dyn Vcs, baseline: &str) -> Result<DiffRecord, CoreError> {
    let current = vcs.current_branch()?;
    info!("current branch: {current}");

    let content = if current == baseline {
        DiffContent::SameBranch
    } else {
        let diff = vcs.diff(baseline, &current)?;
        if diff.trim().is_empty() {
            DiffContent::NoChanges
        } else {
            DiffContent::Changes(diff)
        }
    };

    Ok(DiffRecord {
        baseline: baseline.to_string(),
        content,
    })
}
