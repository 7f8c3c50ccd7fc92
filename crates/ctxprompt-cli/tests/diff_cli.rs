//! End-to-end runs of the diff binary against real temporary git repositories.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(["-c", "user.email=test@test.com", "-c", "user.name=Test"])
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap();
    assert!(status.success(), "git {args:?} failed");
}

/// A repository with one commit on `main`.
fn create_test_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init", "-q"]);
    git(dir.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
    std::fs::write(dir.path().join("README.md"), "# Test\n").unwrap();
    git(dir.path(), &["add", "-A"]);
    git(dir.path(), &["commit", "-q", "-m", "initial"]);
    dir
}

fn run_diff(repo: &Path, out_dir: &Path, extra: &[&str]) -> Output {
    let input = out_dir.join("input");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::write(input.join("generic-instructions.md"), "Review carefully.").unwrap();

    Command::new(env!("CARGO_BIN_EXE_ctxprompt-diff"))
        .args(["--instructions", "Review my changes", "--repo"])
        .arg(repo)
        .args(extra)
        .env("CTXPROMPT_INPUT_DIR", &input)
        .env("CTXPROMPT_OUTPUT_DIR", out_dir.join("output"))
        .output()
        .unwrap()
}

#[test]
fn on_main_branch_shows_placeholder() {
    let repo = create_test_repo();
    let work = TempDir::new().unwrap();

    let out = run_diff(repo.path(), work.path(), &["--main-branch", "main"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains(
        "## Git Diff\n\nDiff between current branch and `main`:\n\n\
         ```diff\n[Current branch is main; no diff to show]\n```"
    ));

    let written: Vec<_> = std::fs::read_dir(work.path().join("output"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with("prompt_diff_"));
}

#[test]
fn feature_branch_diff_is_included() {
    let repo = create_test_repo();
    git(repo.path(), &["checkout", "-q", "-b", "feature"]);
    std::fs::write(repo.path().join("README.md"), "# Test\nnew line\n").unwrap();
    git(repo.path(), &["commit", "-q", "-am", "change"]);

    let work = TempDir::new().unwrap();
    let out = run_diff(repo.path(), work.path(), &[]);
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("```diff\ndiff --git a/README.md b/README.md"));
    assert!(stdout.contains("+new line"));
}

#[test]
fn branch_without_changes_reports_none() {
    let repo = create_test_repo();
    git(repo.path(), &["checkout", "-q", "-b", "feature"]);

    let work = TempDir::new().unwrap();
    let out = run_diff(repo.path(), work.path(), &[]);
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout)
        .unwrap()
        .contains("[No changes between current branch and main branch]"));
}

#[test]
fn unknown_baseline_exits_with_status_one() {
    let repo = create_test_repo();
    git(repo.path(), &["checkout", "-q", "-b", "feature"]);

    let work = TempDir::new().unwrap();
    let out = run_diff(repo.path(), work.path(), &["--main-branch", "does-not-exist"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("does-not-exist...feature"), "stderr: {stderr}");
    assert!(!work.path().join("output").exists());
}

#[test]
fn non_repository_exits_with_status_one() {
    let not_repo = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    let out = run_diff(not_repo.path(), work.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("is not a valid git repository"));
}
