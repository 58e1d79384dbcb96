//! Pure PokeAPI REST client.
//!
//! A minimal client for the public PokeAPI. Supports listing the Pokémon
//! catalog, fetching a single Pokémon, and following its species link.
//!
//! # Example
//!
//! ```rust,ignore
//! use pokeapi_client::PokeApiClient;
//!
//! let client = PokeApiClient::new()?;
//!
//! let catalog = client.list_pokemon(1200).await?;
//! let bulbasaur = client.get_pokemon("bulbasaur").await?;
//! if let Some(url) = bulbasaur.species_url() {
//!     let species = client.get_species(url).await?;
//!     println!("{:?}", species.habitat);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{PokeApiError, Result};
pub use types::{
    NamedApiResource, Pokemon, PokemonAbilitySlot, PokemonList, PokemonSpecies, PokemonTypeSlot,
    ResourceRef,
};

use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Client against the public API with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Client against the public API with a custom per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another PokeAPI deployment (mirrors, local caches).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of the catalog. No pagination: entries beyond `limit` are not returned.
    pub async fn list_pokemon(&self, limit: u32) -> Result<Vec<NamedApiResource>> {
        let url = format!("{}/pokemon?limit={}", self.base_url, limit);
        let list: PokemonList = self.get_json(&url).await?;
        tracing::debug!(count = list.results.len(), limit, "Fetched Pokémon catalog");
        Ok(list.results)
    }

    /// Fetch a single Pokémon by name or id.
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = reqwest::Url::parse(&format!("{}/pokemon/", self.base_url))
            .and_then(|base| base.join(name))
            .map_err(|e| PokeApiError::InvalidUrl(format!("{name}: {e}")))?;
        self.get_json(url.as_str()).await
    }

    /// Follow a species link taken from a [`Pokemon`] payload.
    pub async fn get_species(&self, url: &str) -> Result<PokemonSpecies> {
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PokeApiError::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = PokeApiClient::new()
            .unwrap()
            .with_base_url("http://localhost:8000/api/v2/");
        assert_eq!(client.base_url(), "http://localhost:8000/api/v2");
    }

    #[test]
    fn default_base_url_is_public_api() {
        let client = PokeApiClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn api_error_names_status_and_url() {
        let err = PokeApiError::Api {
            status: 404,
            url: "https://pokeapi.co/api/v2/pokemon/failmon".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (404) for https://pokeapi.co/api/v2/pokemon/failmon"
        );
    }
}
