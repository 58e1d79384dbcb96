//! Per-entity enrichment errors.

use pokeapi_client::PokeApiError;
use thiserror::Error;

/// Why a single Pokémon produced no record.
///
/// Only primary-lookup problems surface here. Species lookup failures are
/// absorbed by the enricher and leave the species fields empty.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// Primary lookup failed (non-2xx, timeout, network, malformed payload)
    #[error("primary lookup for {name} failed: {source}")]
    Primary {
        name: String,
        #[source]
        source: PokeApiError,
    },
}

impl EnrichError {
    pub fn name(&self) -> &str {
        match self {
            Self::Primary { name, .. } => name,
        }
    }
}
