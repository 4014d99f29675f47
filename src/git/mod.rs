pub mod repo;

pub use repo::{parse_log_line, parse_log_output, GitRepo};
