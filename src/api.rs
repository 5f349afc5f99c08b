//! PokeAPI client
//!
//! One paginated listing request, one detail request per selection, and the
//! sprite image download. Every call is a single guarded GET; a non-success
//! status or parse failure is an `Err` the reducer degrades from.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::state::{PokemonDetail, PokemonStat};

const API_BASE: &str = "https://pokeapi.co/api/v2";

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    name: String,
    types: Vec<PokemonTypeSlot>,
    stats: Vec<PokemonStatSlot>,
    sprites: serde_json::Value,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonStatSlot {
    base_stat: u16,
    stat: NamedResource,
}

/// Fetch the first page of entry names, up to `limit`.
pub async fn fetch_pokemon_list(limit: u16) -> Result<Vec<String>, String> {
    let url = format!("{API_BASE}/pokemon?limit={limit}");
    let response: ListResponse = fetch_json(&url).await?;
    Ok(response
        .results
        .into_iter()
        .map(|entry| entry.name)
        .collect())
}

/// Fetch the detail record for one entry.
pub async fn fetch_pokemon(name: &str) -> Result<PokemonDetail, String> {
    let url = format!("{API_BASE}/pokemon/{}", name.to_lowercase());
    let response: PokemonResponse = fetch_json(&url).await?;

    let types = response
        .types
        .into_iter()
        .map(|slot| slot.type_info.name)
        .collect();
    let stats = response
        .stats
        .into_iter()
        .map(|slot| PokemonStat {
            name: slot.stat.name,
            value: slot.base_stat,
        })
        .collect();

    Ok(PokemonDetail {
        name: response.name,
        types,
        stats,
        sprite_front_default: pointer_string(&response.sprites, "/front_default"),
    })
}

/// Download the sprite image bytes.
pub async fn fetch_sprite_bytes(url: &str) -> Result<Vec<u8>, String> {
    let client = http_client();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    let response = response.error_for_status().map_err(|err| err.to_string())?;
    let bytes = response
        .bytes()
        .await
        .map_err(|err| err.to_string())?
        .to_vec();
    Ok(bytes)
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let client = http_client();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    let response = response.error_for_status().map_err(|err| err.to_string())?;
    response.json().await.map_err(|err| err.to_string())
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_response_parses_sprite_pointer() {
        let raw = serde_json::json!({
            "name": "charizard",
            "types": [
                { "slot": 1, "type": { "name": "fire", "url": "" } },
                { "slot": 2, "type": { "name": "flying", "url": "" } }
            ],
            "stats": [
                { "base_stat": 78, "stat": { "name": "hp", "url": "" } },
                { "base_stat": 84, "stat": { "name": "attack", "url": "" } }
            ],
            "sprites": { "front_default": "https://example.test/6.png" }
        });
        let response: PokemonResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.name, "charizard");
        assert_eq!(
            pointer_string(&response.sprites, "/front_default").as_deref(),
            Some("https://example.test/6.png")
        );
    }

    #[test]
    fn test_pointer_string_missing_is_none() {
        let value = serde_json::json!({ "front_default": null });
        assert_eq!(pointer_string(&value, "/front_default"), None);
        assert_eq!(pointer_string(&value, "/back_default"), None);
    }

    #[test]
    fn test_list_response_parses_names() {
        let raw = serde_json::json!({
            "count": 2,
            "results": [
                { "name": "bulbasaur", "url": "" },
                { "name": "ivysaur", "url": "" }
            ]
        });
        let response: ListResponse = serde_json::from_value(raw).unwrap();
        let names: Vec<_> = response.results.into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["bulbasaur", "ivysaur"]);
    }
}
