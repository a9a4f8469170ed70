//! Location-area payloads
//!
//! Shapes of the `/location-area/` list and detail responses.

use serde::Deserialize;

use super::NamedResource;

/// One page of the paginated location-area list.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreasPage {
    /// Total number of areas across all pages
    pub count: u32,
    /// URL of the following page, absent on the last page
    pub next: Option<String>,
    /// URL of the preceding page, absent on the first page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

/// A single location area with the pokemon that can be met there.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}
