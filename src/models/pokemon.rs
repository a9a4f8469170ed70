//! Pokemon payloads
//!
//! Subset of the `/pokemon/{name}/` response the REPL renders.

use serde::Deserialize;

use super::NamedResource;

/// A pokemon record as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Missing for a handful of forms; treated as zero
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Base experience, zero when the API omits it.
    pub fn base_experience(&self) -> u32 {
        self.base_experience.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pokemon() {
        let json = r#"{
            "name": "pidgey",
            "base_experience": 50,
            "height": 3,
            "weight": 18,
            "stats": [
                {"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "normal", "url": "https://pokeapi.co/api/v2/type/1/"}},
                {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.base_experience(), 50);
        assert_eq!(pokemon.stats[0].stat.name, "hp");
        assert_eq!(pokemon.types[1].kind.name, "flying");
    }

    #[test]
    fn test_null_base_experience_counts_as_zero() {
        let json = r#"{"name": "missingno", "base_experience": null, "height": 1, "weight": 1}"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.base_experience(), 0);
        assert!(pokemon.stats.is_empty());
    }
}
