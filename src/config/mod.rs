use crate::{
    Error, Result, ENV_CONFIG_PATH, ENV_KINESIS_ENDPOINT_URL, ENV_KINESIS_SHARD_COUNT,
    ENV_KINESIS_STREAM_NAME,
};

use std::env;
use std::time::Duration;
use validator::Validate;

mod file;

use file::ConfigFile;

const DEFAULT_POLL_INTERVAL_SECS: u32 = 3;

#[derive(Debug, Validate)]
struct RawConfig {
    #[validate(required, length(min = 1, max = 128))]
    stream_name: Option<String>,
    #[validate(range(min = 1))]
    shard_count: Option<i32>,
    #[validate(range(min = 1))]
    poll_interval_secs: u32,
    max_wait_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    endpoint_url: Option<String>,
    stream_name: String,
    shard_count: Option<i32>,
    poll_interval: Duration,
    max_wait: Option<Duration>,
}

impl Config {
    /// Read the environment and, when `CONFIG_PATH` is set, a YAML file.
    /// Environment values win over file values.
    pub fn new() -> Result<Self> {
        let file = ConfigFile::new(env::var(ENV_CONFIG_PATH).ok());
        Self::from_sources(file, |key| env::var(key).ok())
    }

    fn from_sources<F>(file: ConfigFile, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let shard_count = match var(ENV_KINESIS_SHARD_COUNT) {
            Some(count) => Some(count.parse::<i32>().map_err(|err| {
                Error::Config(format!("{ENV_KINESIS_SHARD_COUNT}={count}: {err}"))
            })?),
            None => file.shard_count,
        };

        let raw = RawConfig {
            stream_name: var(ENV_KINESIS_STREAM_NAME).or(file.stream_name),
            shard_count,
            poll_interval_secs: file
                .poll_interval_secs
                .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
            max_wait_secs: file.max_wait_secs,
        };
        raw.validate()
            .map_err(|err| Error::Config(format!("{err}")))?;

        Ok(Self {
            endpoint_url: var(ENV_KINESIS_ENDPOINT_URL),
            stream_name: raw.stream_name.unwrap_or_default(),
            shard_count: raw.shard_count,
            poll_interval: Duration::from_secs(u64::from(raw.poll_interval_secs)),
            max_wait: raw.max_wait_secs.map(Duration::from_secs),
        })
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }

    pub fn stream_name(&self) -> &str {
        self.stream_name.as_str()
    }

    pub fn shard_count(&self) -> Option<i32> {
        self.shard_count
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn max_wait(&self) -> Option<Duration> {
        self.max_wait
    }
}
