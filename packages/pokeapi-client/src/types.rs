use serde::Deserialize;

/// `{name, url}` pair used throughout PokeAPI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl NamedApiResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

/// Loosely-shaped reference where either half may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Response of `GET /pokemon?limit=N`.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonList {
    pub results: Vec<NamedApiResource>,
}

/// Response of `GET /pokemon/{name}`, reduced to the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub species: Option<ResourceRef>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbilitySlot>,
}

impl Pokemon {
    /// Species detail URL, if the payload exposes one.
    pub fn species_url(&self) -> Option<&str> {
        self.species.as_ref()?.url.as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedApiResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonAbilitySlot {
    pub ability: NamedApiResource,
}

/// Response of `GET /pokemon-species/{id}`, reduced to the fields we read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokemonSpecies {
    #[serde(default)]
    pub habitat: Option<ResourceRef>,
    #[serde(default)]
    pub color: Option<ResourceRef>,
    #[serde(default)]
    pub is_legendary: Option<bool>,
    #[serde(default)]
    pub is_mythical: Option<bool>,
    #[serde(default)]
    pub evolution_chain: Option<ResourceRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ],
        "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"},
        "abilities": [
            {"ability": {"name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": "https://pokeapi.co/api/v2/ability/34/"}, "is_hidden": true, "slot": 3}
        ],
        "sprites": {"front_default": null}
    }"#;

    #[test]
    fn decodes_pokemon_and_ignores_unknown_fields() {
        let pokemon: Pokemon = serde_json::from_str(BULBASAUR).unwrap();

        assert_eq!(pokemon.id, 1);
        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(pokemon.height, Some(7));
        assert_eq!(pokemon.types.len(), 2);
        assert_eq!(pokemon.types[1].kind.name, "poison");
        assert_eq!(pokemon.abilities[1].ability.name, "chlorophyll");
        assert_eq!(
            pokemon.species_url(),
            Some("https://pokeapi.co/api/v2/pokemon-species/1/")
        );
    }

    #[test]
    fn pokemon_without_optional_sections_still_decodes() {
        let pokemon: Pokemon = serde_json::from_str(r#"{"id": 10, "name": "missingno"}"#).unwrap();

        assert!(pokemon.types.is_empty());
        assert!(pokemon.abilities.is_empty());
        assert_eq!(pokemon.weight, None);
        assert_eq!(pokemon.species_url(), None);
    }

    #[test]
    fn pokemon_without_id_is_rejected() {
        let result = serde_json::from_str::<Pokemon>(r#"{"name": "ghost"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn species_tolerates_null_references() {
        let species: PokemonSpecies = serde_json::from_str(
            r#"{
                "habitat": null,
                "color": {"name": "green", "url": "https://pokeapi.co/api/v2/pokemon-color/5/"},
                "is_legendary": false,
                "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/1/"}
            }"#,
        )
        .unwrap();

        assert_eq!(species.habitat, None);
        assert_eq!(species.color.unwrap().name.as_deref(), Some("green"));
        assert_eq!(species.is_mythical, None);
        assert_eq!(
            species.evolution_chain.unwrap().url.as_deref(),
            Some("https://pokeapi.co/api/v2/evolution-chain/1/")
        );
    }

    #[test]
    fn list_requires_results() {
        let list: PokemonList = serde_json::from_str(
            r#"{"count": 1302, "next": null, "results": [{"name": "bulbasaur", "url": "u1"}, {"name": "ivysaur", "url": "u2"}]}"#,
        )
        .unwrap();
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[0].name, "bulbasaur");

        assert!(serde_json::from_str::<PokemonList>(r#"{"count": 0}"#).is_err());
    }
}
