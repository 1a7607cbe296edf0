use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use travelmoji::server::{self, Config};

/// Initialize logging, `RUST_LOG` overrides the default filter.
fn init_logging() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set up logging")?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load configuration: {err}");
            return Err(err.into());
        }
    };
    info!(
        train = config.options.train,
        cache_max_age = config.cache_max_age,
        "starting travelmoji"
    );

    server::serve(config).await?;
    Ok(())
}
