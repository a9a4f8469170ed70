//! Pokedex - An interactive PokeAPI explorer
//!
//! Browses location areas, explores them and catches pokemon from a REPL,
//! with every API response held in a time-expiring in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::{HttpFetcher, PokeApiClient};
pub use cache::ResponseCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
