use aws_sdk_kinesis::types;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum StreamStatus {
    Creating,
    Active,
    Deleting,
    Updating,
    Unknown,
}

impl From<types::StreamStatus> for StreamStatus {
    fn from(status: types::StreamStatus) -> StreamStatus {
        match status {
            types::StreamStatus::Creating => StreamStatus::Creating,
            types::StreamStatus::Active => StreamStatus::Active,
            types::StreamStatus::Deleting => StreamStatus::Deleting,
            types::StreamStatus::Updating => StreamStatus::Updating,
            _ => StreamStatus::Unknown,
        }
    }
}

impl fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamStatus::Creating => write!(f, "CREATING"),
            StreamStatus::Active => write!(f, "ACTIVE"),
            StreamStatus::Deleting => write!(f, "DELETING"),
            StreamStatus::Updating => write!(f, "UPDATING"),
            StreamStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
