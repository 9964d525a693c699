use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Stream {0} not found")]
    NotFound(String),
    #[error("Stream {0} is being deleted. Please re-run the script.")]
    BeingDeleted(String),
    #[error("Stream {stream} has {actual} shards, while requested number of shards is {requested}")]
    ShardCountMismatch {
        stream: String,
        actual: usize,
        requested: i32,
    },
    #[error("Stream {stream} did not become active within {waited:?}")]
    WaitTimeout { stream: String, waited: Duration },
    #[error("Invalid config: {0}")]
    Config(String),
    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
