use tracing_subscriber::EnvFilter;

use reviewlens_server::{cli, startup};

fn load_config() -> reviewlens_core::Config {
    reviewlens_core::config::load_dotenv();
    reviewlens_core::Config::from_env()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let config = load_config();
    let args: Vec<String> = std::env::args().collect();

    if cli::dispatch(&config, &args)? {
        return Ok(());
    }

    config.log_summary();
    if let Err(e) = startup::serve(&config).await {
        tracing::error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}
