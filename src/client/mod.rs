mod kinesis;
#[cfg(test)]
mod mock;

use crate::types::{DescribeStreamOutput, PutRecordOutput};
use crate::Result;

use async_trait::async_trait;

/// Remote operations needed to manage a single stream.
///
/// Implementations must return [`crate::Error::NotFound`] from
/// `describe_stream` and `delete_stream` when the stream does not exist.
#[async_trait]
pub trait Client: Send + Sync {
    async fn describe_stream(
        &self,
        stream: &str,
        exclusive_start_shard_id: Option<String>,
    ) -> Result<DescribeStreamOutput>;
    async fn create_stream(&self, stream: &str, shard_count: i32) -> Result<()>;
    async fn delete_stream(&self, stream: &str) -> Result<()>;
    async fn put_record(&self, stream: &str, key: &str, data: &[u8]) -> Result<PutRecordOutput>;
}

pub use kinesis::{KinesisClient, KinesisClientBuilder};
#[cfg(test)]
pub use mock::{Call, MockClient, Reply};
