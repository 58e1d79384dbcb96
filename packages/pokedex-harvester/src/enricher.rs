//! Primary + species lookup for a single Pokémon.

use tracing::{error, warn};

use crate::api::PokeApi;
use crate::error::EnrichError;
use crate::record::PokemonRecord;

pub struct Enricher<'a, A: PokeApi> {
    api: &'a A,
}

impl<'a, A: PokeApi> Enricher<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Build the record for one name.
    ///
    /// A failed primary lookup drops the whole record. A failed or missing
    /// species lookup only leaves the species fields at their defaults.
    pub async fn enrich(&self, name: &str) -> Result<PokemonRecord, EnrichError> {
        let name = name.to_lowercase();

        let pokemon = self.api.pokemon(&name).await.map_err(|source| {
            error!(name = %name, error = %source, "Failed to extract Pokémon data");
            EnrichError::Primary {
                name: name.clone(),
                source,
            }
        })?;

        let species = match pokemon.species_url() {
            Some(url) => match self.api.species(url).await {
                Ok(species) => Some(species),
                Err(e) => {
                    warn!(name = %name, url, error = %e, "Species lookup failed, keeping primary fields");
                    None
                }
            },
            None => None,
        };

        Ok(PokemonRecord::from_payloads(&pokemon, species.as_ref()))
    }
}
