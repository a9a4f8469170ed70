//! REPL session state
//!
//! Everything a command may read or change between prompts.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::PokeApiClient;
use crate::models::Pokemon;

/// Mutable state carried across commands for one REPL run.
pub struct Session {
    /// Cached API access
    pub client: PokeApiClient,
    /// URL of the next location-area page; `None` restarts from the first page
    pub next: Option<String>,
    /// URL of the previous location-area page; `None` on the first page
    pub previous: Option<String>,
    /// Caught pokemon by name, listed in name order
    pub pokedex: BTreeMap<String, Pokemon>,
    /// Source of catch rolls
    pub rng: StdRng,
}

impl Session {
    /// Creates a session with an entropy-seeded RNG.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a caller-supplied RNG, for reproducible rolls.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            pokedex: BTreeMap::new(),
            rng,
        }
    }
}
