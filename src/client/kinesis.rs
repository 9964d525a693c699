use super::Client;
use crate::types::{DescribeStreamOutput, PutRecordOutput, StreamStatus};
use crate::{Error, Result};

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_kinesis::{
    config::Builder as ConfigBuilder,
    error::SdkError,
    operation::{delete_stream::DeleteStreamError, describe_stream::DescribeStreamError},
    primitives::Blob,
    Client as SdkClient,
};

#[derive(Debug, Clone)]
pub struct KinesisClient {
    client: SdkClient,
}

impl KinesisClient {
    pub async fn builder() -> KinesisClientBuilder {
        KinesisClientBuilder::new().await
    }
}

#[derive(Debug)]
pub struct KinesisClientBuilder {
    builder: ConfigBuilder,
}

impl KinesisClientBuilder {
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self {
            builder: ConfigBuilder::from(&config),
        }
    }

    pub fn endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => Self {
                builder: self.builder.endpoint_url(url),
            },
            None => self,
        }
    }

    pub fn build(self) -> KinesisClient {
        let client = SdkClient::from_conf(self.builder.build());
        KinesisClient { client }
    }
}

#[async_trait]
impl Client for KinesisClient {
    async fn describe_stream(
        &self,
        stream: &str,
        exclusive_start_shard_id: Option<String>,
    ) -> Result<DescribeStreamOutput> {
        let output = self
            .client
            .describe_stream()
            .stream_name(stream)
            .set_exclusive_start_shard_id(exclusive_start_shard_id)
            .send()
            .await
            .map_err(|err| from_describe_err(stream, err))?;

        let description = match output.stream_description() {
            Some(description) => description,
            None => return Ok(DescribeStreamOutput::default()),
        };

        let shard_ids: Vec<String> = description
            .shards()
            .iter()
            .map(|shard| shard.shard_id().to_string())
            .collect();

        let last_shard_id = if description.has_more_shards() {
            shard_ids.last().cloned()
        } else {
            None
        };

        Ok(DescribeStreamOutput {
            status: Some(StreamStatus::from(description.stream_status().clone())),
            shard_ids,
            last_shard_id,
        })
    }

    async fn create_stream(&self, stream: &str, shard_count: i32) -> Result<()> {
        self.client
            .create_stream()
            .stream_name(stream)
            .shard_count(shard_count)
            .send()
            .await
            .map(|_| ())
            .map_err(|err| Error::Remote(anyhow::Error::from(err)))
    }

    async fn delete_stream(&self, stream: &str) -> Result<()> {
        self.client
            .delete_stream()
            .stream_name(stream)
            .send()
            .await
            .map(|_| ())
            .map_err(|err| from_delete_err(stream, err))
    }

    async fn put_record(&self, stream: &str, key: &str, data: &[u8]) -> Result<PutRecordOutput> {
        self.client
            .put_record()
            .stream_name(stream)
            .partition_key(key)
            .data(Blob::new(data))
            .send()
            .await
            .map(|output| PutRecordOutput::new(output.shard_id(), output.sequence_number()))
            .map_err(|err| Error::Remote(anyhow::Error::from(err)))
    }
}

fn from_describe_err(stream: &str, err: SdkError<DescribeStreamError>) -> Error {
    match err {
        SdkError::ServiceError(e) => match e.into_err() {
            DescribeStreamError::ResourceNotFoundException(_) => Error::NotFound(stream.into()),
            e => Error::Remote(anyhow::Error::from(e)),
        },
        _ => Error::Remote(anyhow::Error::from(err)),
    }
}

fn from_delete_err(stream: &str, err: SdkError<DeleteStreamError>) -> Error {
    match err {
        SdkError::ServiceError(e) => match e.into_err() {
            DeleteStreamError::ResourceNotFoundException(_) => Error::NotFound(stream.into()),
            e => Error::Remote(anyhow::Error::from(e)),
        },
        _ => Error::Remote(anyhow::Error::from(err)),
    }
}
