use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeatError>;

#[derive(Error, Debug)]
pub enum HeatError {
    #[error("{0}")]
    Config(String),
    #[error(transparent)]
    Git(#[from] Box<gix::discover::Error>),
    #[error(transparent)]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("git log failed ({status}): {stderr}")]
    GitCommand { status: ExitStatus, stderr: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for HeatError {
    fn from(err: gix::discover::Error) -> Self {
        HeatError::Git(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for HeatError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        HeatError::RefFind(Box::new(err))
    }
}
