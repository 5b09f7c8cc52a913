use anyhow::Result;
use tracing_subscriber::EnvFilter;

use redir::config::Config;
use redir::server;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; system environment variables still apply.
    if dotenvy::dotenv().is_err() {
        eprintln!("No .env file found, using system environment variables");
    }

    let config = Config::from_env()?;
    config.validate()?;

    init_tracing(&config);

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.log_format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
