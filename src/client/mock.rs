use super::Client;
use crate::types::{DescribeStreamOutput, PutRecordOutput, StreamStatus};
use crate::{Error, Result};

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Describe(String, Option<String>),
    Create(String, i32),
    Delete(String),
    Put {
        stream: String,
        key: String,
        data: Vec<u8>,
    },
}

#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    NotFound,
    Fail(String),
}

impl<T> Reply<T> {
    fn into_result(self, stream: &str) -> Result<T> {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::NotFound => Err(Error::NotFound(stream.into())),
            Reply::Fail(message) => Err(Error::Remote(anyhow::anyhow!(message))),
        }
    }
}

/// Scripted client. Describe replies are consumed in order and the last one
/// repeats, so a stuck remote status needs only one entry.
#[derive(Debug)]
pub struct MockClient {
    describes: Mutex<VecDeque<Reply<DescribeStreamOutput>>>,
    create: Reply<()>,
    delete: Reply<()>,
    put: Reply<PutRecordOutput>,
    calls: Mutex<Vec<Call>>,
}

impl Default for MockClient {
    fn default() -> Self {
        Self {
            describes: Mutex::new(VecDeque::new()),
            create: Reply::Ok(()),
            delete: Reply::Ok(()),
            put: Reply::Fail("put_record is not scripted".into()),
            calls: Mutex::new(vec![]),
        }
    }
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn describe(self, reply: Reply<DescribeStreamOutput>) -> Self {
        self.describes.lock().unwrap().push_back(reply);
        self
    }

    pub fn status<I, T>(self, status: StreamStatus, shard_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.describe(Reply::Ok(DescribeStreamOutput::new(status, shard_ids)))
    }

    pub fn not_found(self) -> Self {
        self.describe(Reply::NotFound)
    }

    pub fn on_delete(self, delete: Reply<()>) -> Self {
        Self { delete, ..self }
    }

    pub fn on_put(self, put: Reply<PutRecordOutput>) -> Self {
        Self { put, ..self }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Client for MockClient {
    async fn describe_stream(
        &self,
        stream: &str,
        exclusive_start_shard_id: Option<String>,
    ) -> Result<DescribeStreamOutput> {
        self.record(Call::Describe(stream.into(), exclusive_start_shard_id));

        let mut describes = self.describes.lock().unwrap();
        let reply = if describes.len() > 1 {
            describes.pop_front()
        } else {
            describes.front().cloned()
        };
        reply.unwrap_or(Reply::NotFound).into_result(stream)
    }

    async fn create_stream(&self, stream: &str, shard_count: i32) -> Result<()> {
        self.record(Call::Create(stream.into(), shard_count));
        self.create.clone().into_result(stream)
    }

    async fn delete_stream(&self, stream: &str) -> Result<()> {
        self.record(Call::Delete(stream.into()));
        self.delete.clone().into_result(stream)
    }

    async fn put_record(&self, stream: &str, key: &str, data: &[u8]) -> Result<PutRecordOutput> {
        self.record(Call::Put {
            stream: stream.into(),
            key: key.into(),
            data: data.to_vec(),
        });
        self.put.clone().into_result(stream)
    }
}

#[tokio::test]
async fn it_repeats_the_last_describe_reply() {
    let client = MockClient::new()
        .status(StreamStatus::Creating, ["shard_0"])
        .status(StreamStatus::Active, ["shard_0"]);

    for expected in [
        StreamStatus::Creating,
        StreamStatus::Active,
        StreamStatus::Active,
    ] {
        let output = client.describe_stream("words", None).await.unwrap();
        assert_eq!(output.status, Some(expected));
    }
    assert_eq!(client.calls().len(), 3);
}
