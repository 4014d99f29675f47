#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str], date: Option<&str>) {
    let mut cmd = Command::new("git");
    cmd.args(args).current_dir(dir);
    if let Some(date) = date {
        cmd.env("GIT_AUTHOR_DATE", date).env("GIT_COMMITTER_DATE", date);
    }
    assert!(cmd.status().unwrap().success(), "git {args:?} failed");
}

pub fn init_git_repo(dir: &Path) {
    // init and basic identity
    git(dir, &["init"], None);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"], None);
    git(dir, &["config", "core.autocrlf", "false"], None);
    git(dir, &["config", "commit.gpgsign", "false"], None);
    git(dir, &["config", "user.email", "you@example.com"], None);
    git(dir, &["config", "user.name", "Your Name"], None);
}

/// Write `name` and commit it. `date` is a local timestamp such as `2024-01-01T12:00:00`.
pub fn commit_file(dir: &Path, name: &str, content: &str, date: Option<&str>) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    git(dir, &["add", "."], None);
    git(dir, &["commit", "-m", &format!("add {name}")], date);
}

pub fn checkout(dir: &Path, args: &[&str]) {
    let mut full = vec!["checkout"];
    full.extend_from_slice(args);
    git(dir, &full, None);
}

pub fn merge_no_ff(dir: &Path, branch: &str, date: &str) {
    git(dir, &["merge", "--no-ff", branch, "-m", &format!("merge {branch}")], Some(date));
}

/// Point `main` at an object that does not exist, so history queries fail.
pub fn dangle_main_branch(dir: &Path) {
    fs::write(
        dir.join(".git/refs/heads/main"),
        "0123456789abcdef0123456789abcdef01234567\n",
    )
    .unwrap();
}

/// Per-weekday totals read back from a rendered grid (ANSI codes already stripped).
pub fn totals(rendered: &str) -> Vec<u32> {
    rendered
        .lines()
        .skip(2)
        .map(|line| {
            let tail = line.trim_end().rsplit("   ").next().unwrap();
            tail.split_whitespace().next().unwrap().parse().unwrap()
        })
        .collect()
}
