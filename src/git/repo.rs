use crate::error::{HeatError, Result};
use crate::model::{CommitRecord, DateBucketMap};
use chrono::NaiveDate;
use gix::{discover, Repository};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, trace};

/// `git log` pretty format: author date, abbreviated hash, ref decoration.
const LOG_FORMAT: &str = "--pretty=format:%ad %h %d";

/// Variables that would point the `git` child at a different repository than the one discovered.
const REPO_ENV: [&str; 7] = [
    "GIT_DIR",
    "GIT_WORK_TREE",
    "GIT_COMMON_DIR",
    "GIT_OBJECT_DIRECTORY",
    "GIT_ALTERNATE_OBJECT_DIRECTORIES",
    "GIT_INDEX_FILE",
    "GIT_NAMESPACE",
];

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
    git_dir: PathBuf,
}

impl GitRepo {
    /// Discover the repository containing `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = discover(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        let git_dir = std::fs::canonicalize(repo.git_dir())?;
        debug!(path = %path.display(), git_dir = %git_dir.display(), "opened repository");

        Ok(Self { repo, path, git_dir })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// False for a freshly initialised repository whose HEAD points at an unborn branch.
    pub fn has_commits(&self) -> Result<bool> {
        Ok(!self.repo.head()?.is_unborn())
    }

    /// Run `git log` over the first-parent history and return its raw output.
    pub fn first_parent_log(&self, since: NaiveDate) -> Result<String> {
        let since_arg = format!("--since={} 00:00:00", since.format("%Y-%m-%d"));
        debug!(since = %since_arg, "running git log");

        let mut cmd = Command::new("git");
        for var in REPO_ENV {
            cmd.env_remove(var);
        }
        let output = cmd
            .arg("--git-dir")
            .arg(&self.git_dir)
            .arg("log")
            .arg(&since_arg)
            .arg(LOG_FORMAT)
            .arg("--date=short-local")
            .arg("--first-parent")
            .current_dir(&self.path)
            .output()?;

        if !output.status.success() {
            return Err(HeatError::GitCommand {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Parse one `<date> <hash> <decoration?>` line. Blank or malformed lines yield `None`.
pub fn parse_log_line(line: &str) -> Option<(NaiveDate, CommitRecord)> {
    let line = line.trim_end();
    if line.trim().is_empty() {
        return None;
    }

    let mut parts = line.splitn(3, ' ');
    let date = NaiveDate::parse_from_str(parts.next()?, "%Y-%m-%d").ok()?;
    let short_hash = parts.next().filter(|h| !h.is_empty())?.to_string();
    let refs = parts
        .next()
        .map(|d| d.trim().trim_start_matches('(').trim_end_matches(')').trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string);

    Some((date, CommitRecord { short_hash, refs }))
}

pub fn parse_log_output(output: &str) -> DateBucketMap {
    let mut buckets = DateBucketMap::new();
    for line in output.lines() {
        match parse_log_line(line) {
            Some((date, record)) => buckets.entry(date).or_default().push(record),
            None if line.trim().is_empty() => {}
            None => trace!(line, "skipping malformed log line"),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_line_without_decoration() {
        let (date, record) = parse_log_line("2024-01-02 abc1234 ").unwrap();
        assert_eq!(date, ymd(2024, 1, 2));
        assert_eq!(record.short_hash, "abc1234");
        assert_eq!(record.refs, None);
    }

    #[test]
    fn parses_ref_decoration() {
        let (_, record) = parse_log_line("2024-01-02 abc1234  (HEAD -> main, tag: v1.0)").unwrap();
        assert_eq!(record.refs.as_deref(), Some("HEAD -> main, tag: v1.0"));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(parse_log_line(""), None);
        assert_eq!(parse_log_line("   "), None);
        assert_eq!(parse_log_line("2024-01-02"), None);
        assert_eq!(parse_log_line("not-a-date abc1234"), None);
        assert_eq!(parse_log_line("2024-02-30 abc1234"), None);
    }

    #[test]
    fn groups_commits_by_day_in_output_order() {
        let output = "2024-01-02 ccc3333  (HEAD -> main)\n\
                      2024-01-02 bbb2222 \n\
                      garbage\n\
                      \n\
                      2024-01-01 aaa1111 ";
        let buckets = parse_log_output(output);

        assert_eq!(buckets.len(), 2);
        let hashes: Vec<_> = buckets[&ymd(2024, 1, 2)]
            .iter()
            .map(|r| r.short_hash.as_str())
            .collect();
        assert_eq!(hashes, vec!["ccc3333", "bbb2222"]);
        assert_eq!(buckets[&ymd(2024, 1, 1)].len(), 1);
    }
}
