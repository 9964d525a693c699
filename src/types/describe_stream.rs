use super::StreamStatus;

/// One page of a stream description.
///
/// `last_shard_id` is `Some` only while the service has more shards to list;
/// pass it back as the exclusive start shard id to fetch the next page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeStreamOutput {
    pub status: Option<StreamStatus>,
    pub shard_ids: Vec<String>,
    pub last_shard_id: Option<String>,
}

impl DescribeStreamOutput {
    pub fn new<I, T>(status: StreamStatus, shard_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            status: Some(status),
            shard_ids: shard_ids.into_iter().map(|id| id.into()).collect(),
            last_shard_id: None,
        }
    }

    pub fn with_last_shard_id<T: Into<String>>(self, id: T) -> Self {
        Self {
            last_shard_id: Some(id.into()),
            ..self
        }
    }

    pub fn shard_count(&self) -> usize {
        self.shard_ids.len()
    }

    pub fn is_active(&self) -> bool {
        self.status == Some(StreamStatus::Active)
    }

    pub fn is_deleting(&self) -> bool {
        self.status == Some(StreamStatus::Deleting)
    }

    /// Merge the next page into this one.
    pub fn append(&mut self, mut page: DescribeStreamOutput) {
        self.shard_ids.append(&mut page.shard_ids);
        self.last_shard_id = page.last_shard_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_appends_pages() {
        let mut first = DescribeStreamOutput::new(StreamStatus::Active, ["shard_0", "shard_1"])
            .with_last_shard_id("shard_1");
        assert_eq!(first.shard_count(), 2);
        assert_eq!(first.last_shard_id.as_deref(), Some("shard_1"));

        first.append(DescribeStreamOutput::new(StreamStatus::Active, ["shard_2"]));
        assert_eq!(first.shard_count(), 3);
        assert!(first.last_shard_id.is_none());
        assert!(first.is_active());
    }
}
