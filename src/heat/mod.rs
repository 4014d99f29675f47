pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod layout;
pub mod output;

pub use aggregate::{aggregate, Aggregate, CountByDate};
pub use exec::{exec, exec_at};
pub use fetch::fetch_commits;
pub use layout::{build_layout, Grid, GridLayout};
pub use output::{band, colorize, month_header, render_heatmap};
