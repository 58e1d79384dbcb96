//! Testing utilities including a mock PokeAPI.
//!
//! Lets the pipeline run end to end without network access.

use async_trait::async_trait;
use pokeapi_client::{
    NamedApiResource, PokeApiError, Pokemon, PokemonAbilitySlot, PokemonSpecies,
    PokemonTypeSlot, ResourceRef, Result,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::api::PokeApi;

const MOCK_BASE: &str = "https://pokeapi.co/api/v2";

/// A mock PokeAPI with canned payloads.
///
/// Names in the catalog without a registered payload answer 404, like the
/// real API does for unknown Pokémon.
#[derive(Default, Clone)]
pub struct MockPokeApi {
    /// Catalog returned by `list_pokemon`, in order
    catalog: Arc<RwLock<Vec<String>>>,

    /// Primary payloads by lowercase name
    pokemon: Arc<RwLock<HashMap<String, Pokemon>>>,

    /// Species payloads by URL
    species: Arc<RwLock<HashMap<String, PokemonSpecies>>>,

    /// Species URLs that time out
    timeout_urls: Arc<RwLock<HashSet<String>>>,

    /// Whether the catalog call fails
    fail_listing: Arc<RwLock<bool>>,

    /// Call tracking
    calls: Arc<RwLock<Vec<MockPokeApiCall>>>,
}

/// Record of a call made to the mock API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockPokeApiCall {
    List { limit: u32 },
    Pokemon { name: String },
    Species { url: String },
}

impl MockPokeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a name to the catalog without registering a payload (it will 404).
    pub fn with_catalog_entry(self, name: impl Into<String>) -> Self {
        self.catalog.write().unwrap().push(name.into());
        self
    }

    /// Register a primary payload and list it in the catalog.
    pub fn with_pokemon(self, pokemon: Pokemon) -> Self {
        self.catalog.write().unwrap().push(pokemon.name.clone());
        self.with_pokemon_unlisted(pokemon)
    }

    /// Register a primary payload without listing it.
    pub fn with_pokemon_unlisted(self, pokemon: Pokemon) -> Self {
        self.pokemon
            .write()
            .unwrap()
            .insert(pokemon.name.to_lowercase(), pokemon);
        self
    }

    /// Register a species payload under its URL.
    pub fn with_species(self, url: impl Into<String>, species: PokemonSpecies) -> Self {
        self.species.write().unwrap().insert(url.into(), species);
        self
    }

    /// Make a species URL time out.
    pub fn timeout_species(self, url: impl Into<String>) -> Self {
        self.timeout_urls.write().unwrap().insert(url.into());
        self
    }

    /// Make the catalog call fail.
    pub fn fail_listing(self) -> Self {
        *self.fail_listing.write().unwrap() = true;
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockPokeApiCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PokeApi for MockPokeApi {
    async fn list_pokemon(&self, limit: u32) -> Result<Vec<NamedApiResource>> {
        self.calls
            .write()
            .unwrap()
            .push(MockPokeApiCall::List { limit });

        if *self.fail_listing.read().unwrap() {
            return Err(PokeApiError::Api {
                status: 503,
                url: format!("{MOCK_BASE}/pokemon?limit={limit}"),
            });
        }

        Ok(self
            .catalog
            .read()
            .unwrap()
            .iter()
            .take(limit as usize)
            .map(|name| NamedApiResource {
                name: name.clone(),
                url: Some(format!("{MOCK_BASE}/pokemon/{name}/")),
            })
            .collect())
    }

    async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.calls.write().unwrap().push(MockPokeApiCall::Pokemon {
            name: name.to_string(),
        });

        self.pokemon
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| PokeApiError::Api {
                status: 404,
                url: format!("{MOCK_BASE}/pokemon/{name}"),
            })
    }

    async fn species(&self, url: &str) -> Result<PokemonSpecies> {
        self.calls.write().unwrap().push(MockPokeApiCall::Species {
            url: url.to_string(),
        });

        if self.timeout_urls.read().unwrap().contains(url) {
            return Err(PokeApiError::Timeout {
                url: url.to_string(),
            });
        }

        self.species
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| PokeApiError::Api {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// Species URL the fixtures use for a given id.
pub fn species_url(id: i64) -> String {
    format!("{MOCK_BASE}/pokemon-species/{id}/")
}

/// Primary payload fixture with a species link and two abilities.
pub fn pokemon(id: i64, name: &str, types: &[&str]) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        types: types
            .iter()
            .map(|t| PokemonTypeSlot {
                kind: NamedApiResource::new(*t),
            })
            .collect(),
        height: Some(7),
        weight: Some(69),
        species: Some(ResourceRef {
            name: Some(name.to_string()),
            url: Some(species_url(id)),
        }),
        abilities: ["overgrow", "chlorophyll"]
            .into_iter()
            .map(|a| PokemonAbilitySlot {
                ability: NamedApiResource::new(a),
            })
            .collect(),
    }
}

/// Species payload fixture.
pub fn species(habitat: &str, color: &str, chain_id: i64) -> PokemonSpecies {
    PokemonSpecies {
        habitat: Some(ResourceRef {
            name: Some(habitat.to_string()),
            url: None,
        }),
        color: Some(ResourceRef {
            name: Some(color.to_string()),
            url: None,
        }),
        is_legendary: Some(false),
        is_mythical: Some(false),
        evolution_chain: Some(ResourceRef {
            name: None,
            url: Some(format!("{MOCK_BASE}/evolution-chain/{chain_id}/")),
        }),
    }
}

/// Register a Pokémon together with its species payload.
pub fn with_full_entry(api: MockPokeApi, id: i64, name: &str, types: &[&str]) -> MockPokeApi {
    api.with_pokemon(pokemon(id, name, types))
        .with_species(species_url(id), species("grassland", "green", id))
}
