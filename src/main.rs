//! Condense server binary.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use condense::inference::InferenceConfig;
use condense::server;

/// Web front-end for document/audio summarization and transcription.
#[derive(Debug, Parser)]
#[command(name = "condense", version, about)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "CONDENSE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "CONDENSE_PORT", default_value_t = 5000)]
    port: u16,

    /// Base URL of the model inference service.
    #[arg(long, env = "INFERENCE_ENDPOINT")]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "condense=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = InferenceConfig::default().with_env_overrides();
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }

    server::serve(config, &cli.host, cli.port).await
}
