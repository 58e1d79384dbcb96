//! Pokédex harvester.
//!
//! Lists the PokeAPI catalog, enriches each Pokémon with its species detail,
//! and writes the results to CSV with periodic backups.
//!
//! # Example
//!
//! ```rust,ignore
//! use pokedex_harvester::{HarvestConfig, Harvester};
//! use pokeapi_client::PokeApiClient;
//!
//! let config = HarvestConfig::default();
//! let client = PokeApiClient::with_timeout(config.timeout)?.with_base_url(&config.base_url);
//! let summary = Harvester::new(client, config).run().await?;
//! println!("{} of {} retrieved", summary.retrieved, summary.total);
//! ```

pub mod api;
pub mod config;
pub mod enricher;
pub mod error;
pub mod lister;
pub mod persister;
pub mod pipeline;
pub mod record;
pub mod testing;

pub use api::PokeApi;
pub use config::HarvestConfig;
pub use enricher::Enricher;
pub use error::EnrichError;
pub use lister::list_names;
pub use persister::{write_table, Persister};
pub use pipeline::{HarvestSummary, Harvester};
pub use record::{PokemonRecord, COLUMNS};
