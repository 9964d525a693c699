#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRecordOutput {
    pub shard_id: String,
    pub sequence_number: String,
}

impl PutRecordOutput {
    pub fn new<S, T>(shard_id: S, sequence_number: T) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            shard_id: shard_id.into(),
            sequence_number: sequence_number.into(),
        }
    }
}
