//! Models Module
//!
//! Typed PokeAPI payloads decoded from cached response bytes.

use serde::Deserialize;

pub mod location;
pub mod pokemon;

pub use location::{LocationAreaDetail, LocationAreasPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

/// The `{name, url}` pair the API uses for every cross reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}
