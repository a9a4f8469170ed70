//! API Module
//!
//! Client side of the PokeAPI.
//!
//! # Endpoints
//! - `GET /location-area/` - Paginated list of location areas
//! - `GET /location-area/{name}/` - Pokemon encounters in one area
//! - `GET /pokemon/{name}/` - Pokemon details

pub mod client;

pub use client::{HttpFetcher, PokeApiClient};
