use crate::git::{parse_log_output, GitRepo};
use crate::model::DateBucketMap;
use anyhow::Context;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Collect first-parent commits authored within `since..=today`, bucketed by day.
pub fn fetch_commits(repo: &GitRepo, since: NaiveDate, today: NaiveDate) -> anyhow::Result<DateBucketMap> {
    if !repo.has_commits().context("Failed to read HEAD")? {
        info!("repository has no commits yet");
        return Ok(DateBucketMap::new());
    }

    let output = repo
        .first_parent_log(since)
        .context("Failed to query commits from repository")?;

    let mut buckets = parse_log_output(&output);
    let before = buckets.len();
    buckets.retain(|date, _| (since..=today).contains(date));
    if buckets.len() != before {
        debug!(dropped = before - buckets.len(), "dropped days outside the window");
    }

    info!(
        days = buckets.len(),
        commits = buckets.values().map(Vec::len).sum::<usize>(),
        "commits collected"
    );
    Ok(buckets)
}
