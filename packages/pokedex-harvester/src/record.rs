//! Flat output record and its CSV row shape.

use pokeapi_client::{Pokemon, PokemonSpecies, ResourceRef};
use serde::Serialize;

/// Column order of every table we write.
pub const COLUMNS: [&str; 13] = [
    "id",
    "name",
    "type_1",
    "type_2",
    "height",
    "weight",
    "category",
    "abilities",
    "habitat",
    "color",
    "is_legendary",
    "is_mythical",
    "evolution_chain",
];

/// One enriched Pokémon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    pub type_1: Option<String>,
    pub type_2: Option<String>,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub category: Option<String>,
    pub abilities: Vec<String>,
    pub habitat: Option<String>,
    pub color: Option<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub evolution_chain: Option<String>,
}

impl PokemonRecord {
    /// Merge a primary payload with an optional species payload.
    ///
    /// Only the first two types are kept. Without species data the species
    /// fields stay empty and both flags are false.
    pub fn from_payloads(pokemon: &Pokemon, species: Option<&PokemonSpecies>) -> Self {
        let mut types = pokemon.types.iter().map(|t| capitalize(&t.kind.name));
        let type_1 = types.next();
        let type_2 = types.next();

        let name_of = |r: &Option<ResourceRef>| r.as_ref().and_then(|r| r.name.clone());

        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            type_1,
            type_2,
            height: pokemon.height,
            weight: pokemon.weight,
            category: name_of(&pokemon.species),
            abilities: pokemon
                .abilities
                .iter()
                .map(|a| a.ability.name.clone())
                .collect(),
            habitat: species.and_then(|s| name_of(&s.habitat)),
            color: species.and_then(|s| name_of(&s.color)),
            is_legendary: species.and_then(|s| s.is_legendary).unwrap_or(false),
            is_mythical: species.and_then(|s| s.is_mythical).unwrap_or(false),
            evolution_chain: species
                .and_then(|s| s.evolution_chain.as_ref())
                .and_then(|e| e.url.clone()),
        }
    }

    pub fn to_row(&self) -> CsvRow<'_> {
        CsvRow {
            id: self.id,
            name: &self.name,
            type_1: self.type_1.as_deref(),
            type_2: self.type_2.as_deref(),
            height: self.height,
            weight: self.weight,
            category: self.category.as_deref(),
            abilities: abilities_cell(&self.abilities),
            habitat: self.habitat.as_deref(),
            color: self.color.as_deref(),
            is_legendary: self.is_legendary,
            is_mythical: self.is_mythical,
            evolution_chain: self.evolution_chain.as_deref(),
        }
    }
}

/// Serialized form of a record; field order must match [`COLUMNS`].
#[derive(Debug, Serialize)]
pub struct CsvRow<'a> {
    pub id: i64,
    pub name: &'a str,
    pub type_1: Option<&'a str>,
    pub type_2: Option<&'a str>,
    pub height: Option<i64>,
    pub weight: Option<i64>,
    pub category: Option<&'a str>,
    pub abilities: String,
    pub habitat: Option<&'a str>,
    pub color: Option<&'a str>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub evolution_chain: Option<&'a str>,
}

// JSON array keeps commas inside ability names unambiguous.
fn abilities_cell(abilities: &[String]) -> String {
    serde_json::to_string(abilities).unwrap_or_else(|_| "[]".to_string())
}

/// Upper-case the first character and lower-case the rest ("grass" -> "Grass").
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
