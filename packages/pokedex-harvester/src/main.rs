use anyhow::{Context, Result};
use pokeapi_client::PokeApiClient;
use pokedex_harvester::{HarvestConfig, Harvester};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pokedex_harvester=debug,pokeapi_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HarvestConfig::default();
    tracing::info!(
        base_url = %config.base_url,
        limit = config.limit,
        output_dir = %config.output_dir.display(),
        "Starting Pokédex harvest"
    );

    let client = PokeApiClient::with_timeout(config.timeout)
        .context("Failed to build HTTP client")?
        .with_base_url(config.base_url.clone());

    Harvester::new(client, config)
        .run()
        .await
        .context("Harvest failed")?;

    Ok(())
}
