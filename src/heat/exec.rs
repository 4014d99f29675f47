use super::{aggregate, build_layout, fetch_commits, render_heatmap, Grid};
use crate::git::GitRepo;
use crate::model::HeatConfig;
use crate::util::cutoff_date;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use std::io::Write;
use tracing::debug;

pub fn exec(config: &HeatConfig) -> anyhow::Result<()> {
    let today = Local::now().date_naive();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    exec_at(config, today, &mut out)
}

/// Run the whole pipeline as of `today`. Nothing is written to `out` until
/// every commit has been fetched and aggregated.
pub fn exec_at<W: Write>(config: &HeatConfig, today: NaiveDate, out: &mut W) -> anyhow::Result<()> {
    let repo = GitRepo::open(&config.repo).context("Failed to open git repository")?;
    let since = cutoff_date(today, config.days).context("Failed to resolve date range")?;

    let buckets = fetch_commits(&repo, since, today)?;
    let heat = aggregate(&buckets);
    debug!(totals = ?heat.weekday_totals.as_array(), "aggregated commits");

    let layout = build_layout(since, today);
    debug!(
        first_monday = %layout.first_monday,
        weeks = layout.week_count,
        labels = layout.month_labels.len(),
        "computed grid layout"
    );
    let grid = Grid::build(&layout, today, &heat.counts);

    render_heatmap(out, &layout, &grid, &heat.weekday_totals).context("Failed to write heatmap")?;
    Ok(())
}
