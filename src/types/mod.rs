mod describe_stream;
mod put_record;
mod stream_status;

pub use describe_stream::DescribeStreamOutput;
pub use put_record::PutRecordOutput;
pub use stream_status::StreamStatus;
