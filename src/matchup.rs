//! Static type-matchup tables and the derived tag-set join
//!
//! Two fixed mappings from type tag to related tags: which types an entry is
//! weak to, and which types it deals double damage against. Lookups are pure
//! and case-insensitive; the tables are literal constants and never change.

use std::collections::BTreeSet;

/// Types the given type takes super-effective damage from.
pub fn weaknesses(tag: &str) -> &'static [&'static str] {
    match tag.to_ascii_lowercase().as_str() {
        "normal" => &["fighting"],
        "fire" => &["water", "rock", "ground"],
        "water" => &["electric", "grass"],
        "electric" => &["ground"],
        "grass" => &["fire", "ice", "poison", "flying", "bug"],
        "ice" => &["fire", "fighting", "rock", "steel"],
        "fighting" => &["flying", "psychic", "fairy"],
        "poison" => &["ground", "psychic"],
        "ground" => &["water", "ice", "grass"],
        "flying" => &["electric", "ice", "rock"],
        "psychic" => &["bug", "ghost", "dark"],
        "bug" => &["fire", "flying", "rock"],
        "rock" => &["water", "grass", "fighting", "ground", "steel"],
        "ghost" => &["ghost", "dark"],
        "dragon" => &["ice", "dragon", "fairy"],
        "dark" => &["fighting", "bug", "fairy"],
        "steel" => &["fire", "fighting", "ground"],
        "fairy" => &["poison", "steel"],
        _ => &[],
    }
}

/// Types the given type deals double damage to.
pub fn advantages(tag: &str) -> &'static [&'static str] {
    match tag.to_ascii_lowercase().as_str() {
        "normal" => &[],
        "fire" => &["grass", "ice", "bug", "steel"],
        "water" => &["fire", "ground", "rock"],
        "electric" => &["water", "flying"],
        "grass" => &["water", "ground", "rock"],
        "ice" => &["grass", "ground", "flying", "dragon"],
        "fighting" => &["normal", "ice", "rock", "dark", "steel"],
        "poison" => &["grass", "fairy"],
        "ground" => &["fire", "electric", "poison", "rock", "steel"],
        "flying" => &["grass", "fighting", "bug"],
        "psychic" => &["fighting", "poison"],
        "bug" => &["grass", "psychic", "dark"],
        "rock" => &["fire", "ice", "flying", "bug"],
        "ghost" => &["psychic", "ghost"],
        "dragon" => &["dragon"],
        "dark" => &["ghost", "psychic"],
        "steel" => &["ice", "rock", "fairy"],
        "fairy" => &["fighting", "dragon", "dark"],
        _ => &[],
    }
}

/// Deduplicated, display-capitalized set of types the tagged entry is weak to.
pub fn weak_to(tags: &[String]) -> Vec<String> {
    join(tags, weaknesses)
}

/// Deduplicated, display-capitalized set of types the tagged entry is strong
/// against.
pub fn strong_against(tags: &[String]) -> Vec<String> {
    join(tags, advantages)
}

fn join(tags: &[String], table: fn(&str) -> &'static [&'static str]) -> Vec<String> {
    let set: BTreeSet<&'static str> = tags
        .iter()
        .flat_map(|tag| table(tag).iter().copied())
        .collect();
    set.into_iter().map(display).collect()
}

fn display(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
