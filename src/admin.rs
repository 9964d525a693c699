use crate::client::Client;
use crate::types::{DescribeStreamOutput, PutRecordOutput, StreamStatus};
use crate::{Config, Error, Result};

use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{info, warn};

const DEFAULT_SHARD_COUNT: i32 = 2;
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Provisions, tears down and writes to a single named stream.
///
/// Remote status is never cached: every decision is taken on a fresh
/// describe call.
pub struct StreamAdmin {
    client: Arc<dyn Client>,
    stream_name: String,
    shard_count: Option<i32>,
    poll_interval: Duration,
    max_wait: Option<Duration>,
}

impl StreamAdmin {
    pub fn new<T: Into<String>>(
        client: Arc<dyn Client>,
        stream_name: T,
        shard_count: Option<i32>,
    ) -> Self {
        Self {
            client,
            stream_name: stream_name.into(),
            shard_count,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_wait: None,
        }
    }

    pub fn from_config(client: Arc<dyn Client>, config: &Config) -> Self {
        Self::new(client, config.stream_name(), config.shard_count())
            .with_poll_interval(config.poll_interval())
            .with_max_wait(config.max_wait())
    }

    pub fn with_poll_interval(self, poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            ..self
        }
    }

    /// Bound the active-wait. `None` waits forever.
    pub fn with_max_wait(self, max_wait: Option<Duration>) -> Self {
        Self { max_wait, ..self }
    }

    pub async fn ensure_deleted(&self) -> Result<()> {
        match self.client.delete_stream(&self.stream_name).await {
            Ok(()) => {
                info!("Deleted stream {}", self.stream_name);
                Ok(())
            }
            Err(err) if err.is_not_found() => Ok(()),
            Err(err) => Err(err),
        }
    }

    pub async fn ensure_created(&self) -> Result<()> {
        let mut description = match self.client.describe_stream(&self.stream_name, None).await {
            Ok(description) => description,
            Err(err) if err.is_not_found() => return self.create().await,
            Err(err) => return Err(err),
        };

        if description.is_deleting() {
            return Err(Error::BeingDeleted(self.stream_name.clone()));
        }
        if !description.is_active() {
            self.wait_until_active().await?;
        }

        let requested = match self.shard_count {
            Some(requested) => requested,
            None => {
                let more = if description.last_shard_id.is_some() {
                    "at least "
                } else {
                    ""
                };
                info!(
                    "Stream {} already exists with {}{} shards",
                    self.stream_name,
                    more,
                    description.shard_count()
                );
                return Ok(());
            }
        };

        self.describe_remaining(&mut description).await?;
        let actual = description.shard_count();
        if usize::try_from(requested).ok() != Some(actual) {
            return Err(Error::ShardCountMismatch {
                stream: self.stream_name.clone(),
                actual,
                requested,
            });
        }

        info!(
            "Stream {} already exists with {} shards",
            self.stream_name, actual
        );
        Ok(())
    }

    pub async fn put_record<D: AsRef<[u8]>>(&self, key: &str, data: D) -> Result<PutRecordOutput> {
        let data = data.as_ref();
        let output = self
            .client
            .put_record(&self.stream_name, key, data)
            .await?;

        info!(
            "Put record to shard '{}' ({}): '{}'",
            output.shard_id,
            output.sequence_number,
            String::from_utf8_lossy(data)
        );
        Ok(output)
    }

    async fn create(&self) -> Result<()> {
        let shard_count = self.shard_count.unwrap_or(DEFAULT_SHARD_COUNT);
        info!(
            "Creating stream {} with {} shards",
            self.stream_name, shard_count
        );

        self.client
            .create_stream(&self.stream_name, shard_count)
            .await?;
        self.wait_until_active().await
    }

    /// Follow the shard pages after `description` until the last one.
    ///
    /// The stream existed when the first page was read, so a missing stream
    /// here is an error rather than a reason to create it.
    async fn describe_remaining(&self, description: &mut DescribeStreamOutput) -> Result<()> {
        while description.last_shard_id.is_some() {
            let page = self
                .client
                .describe_stream(&self.stream_name, description.last_shard_id.take())
                .await
                .map_err(|err| match err {
                    Error::NotFound(stream) => Error::Remote(anyhow::anyhow!(
                        "Stream {stream} disappeared while listing its shards"
                    )),
                    err => err,
                })?;
            description.append(page);
        }

        Ok(())
    }

    /// Poll until the stream reports ACTIVE.
    ///
    /// A stream that disappears while polling also ends the wait.
    async fn wait_until_active(&self) -> Result<()> {
        let started = Instant::now();

        loop {
            let status = match self.client.describe_stream(&self.stream_name, None).await {
                Ok(description) => description.status,
                Err(err) if err.is_not_found() => None,
                Err(err) => return Err(err),
            };

            let status = match status {
                Some(StreamStatus::Active) => return Ok(()),
                Some(status) => status,
                None => {
                    warn!(
                        "{} has no status while waiting for it to become active",
                        self.stream_name
                    );
                    return Ok(());
                }
            };

            if let Some(max_wait) = self.max_wait {
                let waited = started.elapsed();
                if waited >= max_wait {
                    return Err(Error::WaitTimeout {
                        stream: self.stream_name.clone(),
                        waited,
                    });
                }
            }

            info!("{}", self.waiting_line(&status));
            sleep(self.poll_interval).await;
        }
    }

    fn waiting_line(&self, status: &StreamStatus) -> String {
        format!(
            "{} has status: {}, sleeping for {} seconds",
            self.stream_name,
            status,
            self.poll_interval.as_secs()
        )
    }
}
