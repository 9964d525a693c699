use kinesis_admin::{Config, KinesisClient, StreamAdmin};
use std::process;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = match Config::new() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };
    let client = KinesisClient::builder()
        .await
        .endpoint_url(config.endpoint_url())
        .build();
    let admin = StreamAdmin::from_config(Arc::new(client), &config);

    if let Err(err) = admin.ensure_created().await {
        error!("{err}");
        process::exit(1);
    }
}
