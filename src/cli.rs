use crate::error::{HeatError, Result};
use crate::model::{HeatConfig, DEFAULT_DAYS};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "githeat")]
#[command(about = "Calendar heatmap of git commit activity")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Path to the git repository")]
    pub path: Option<PathBuf>,

    #[arg(short, long, help = "Path to the git repository")]
    pub repo: Option<PathBuf>,

    #[arg(short, long, default_value_t = DEFAULT_DAYS, help = "Number of days to look back for commits")]
    pub days: u32,

    #[arg(short, long, action = ArgAction::Count, help = "Log more diagnostics to stderr (repeatable)")]
    pub verbose: u8,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The positional path wins over `--repo`. An empty path counts as missing.
    pub fn into_config(self) -> Result<HeatConfig> {
        let repo = self
            .path
            .or(self.repo)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| HeatError::Config("repository path is required".to_string()))?;

        Ok(HeatConfig::new(repo)
            .with_days(self.days)
            .with_verbosity(self.verbose))
    }

    pub fn execute(self) -> anyhow::Result<()> {
        let config = self.into_config()?;
        crate::logging::enable_logging(config.verbosity)?;
        crate::heat::exec(&config)
    }
}
