//! Seam between the pipeline and the PokeAPI transport.

use async_trait::async_trait;
use pokeapi_client::{NamedApiResource, PokeApiClient, Pokemon, PokemonSpecies, Result};

/// The three upstream calls the harvester makes.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// Catalog page of at most `limit` entries.
    async fn list_pokemon(&self, limit: u32) -> Result<Vec<NamedApiResource>>;

    /// Primary lookup.
    async fn pokemon(&self, name: &str) -> Result<Pokemon>;

    /// Secondary lookup, following the species link from a primary payload.
    async fn species(&self, url: &str) -> Result<PokemonSpecies>;
}

#[async_trait]
impl PokeApi for PokeApiClient {
    async fn list_pokemon(&self, limit: u32) -> Result<Vec<NamedApiResource>> {
        PokeApiClient::list_pokemon(self, limit).await
    }

    async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.get_pokemon(name).await
    }

    async fn species(&self, url: &str) -> Result<PokemonSpecies> {
        self.get_species(url).await
    }
}
