use tracing::{error, info};

use crate::api::PokeApi;

/// Names from one catalog page, in catalog order.
///
/// A failed catalog call yields an empty list; the run then has nothing to do.
pub async fn list_names<A: PokeApi>(api: &A, limit: u32) -> Vec<String> {
    match api.list_pokemon(limit).await {
        Ok(entries) => {
            info!(count = entries.len(), limit, "Fetched Pokémon list");
            entries.into_iter().map(|e| e.name).collect()
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch Pokémon list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{pokemon, MockPokeApi, MockPokeApiCall};

    #[tokio::test]
    async fn returns_names_in_catalog_order() {
        let api = MockPokeApi::new()
            .with_pokemon(pokemon(2, "ivysaur", &["grass"]))
            .with_pokemon(pokemon(1, "bulbasaur", &["grass"]))
            .with_catalog_entry("ivysaur");

        let names = list_names(&api, 1200).await;

        assert_eq!(names, vec!["ivysaur", "bulbasaur", "ivysaur"]);
        assert_eq!(api.calls(), vec![MockPokeApiCall::List { limit: 1200 }]);
    }

    #[tokio::test]
    async fn truncates_at_limit() {
        let api = MockPokeApi::new()
            .with_catalog_entry("a")
            .with_catalog_entry("b")
            .with_catalog_entry("c");

        assert_eq!(list_names(&api, 2).await, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn listing_failure_yields_empty() {
        let api = MockPokeApi::new()
            .with_catalog_entry("bulbasaur")
            .fail_listing();

        assert!(list_names(&api, 1200).await.is_empty());
    }
}
