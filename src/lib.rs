mod admin;
pub mod client;
mod config;
mod error;
pub mod types;

pub use admin::StreamAdmin;
pub use client::{Client, KinesisClient};
pub use config::Config;
pub use error::{Error, Result};

pub const ENV_KINESIS_ENDPOINT_URL: &str = "KINESIS_ENDPOINT_URL";
pub const ENV_KINESIS_STREAM_NAME: &str = "KINESIS_STREAM_NAME";
pub const ENV_KINESIS_SHARD_COUNT: &str = "KINESIS_SHARD_COUNT";
pub const ENV_CONFIG_PATH: &str = "CONFIG_PATH";
