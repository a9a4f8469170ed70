//! PokeAPI client
//!
//! HTTP fetcher plus typed lookups that route every request through the
//! response cache.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::{get_or_fetch, Fetcher, ResponseCache};
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreasPage, Pokemon};

// == HTTP Fetcher ==
/// Fetches raw response bodies over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.as_u16() > 399 {
            return Err(PokedexError::BadStatus(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

// == PokeAPI Client ==
/// Typed access to the location-area and pokemon endpoints.
#[derive(Clone)]
pub struct PokeApiClient {
    base_url: String,
    cache: Arc<ResponseCache>,
    fetcher: Arc<dyn Fetcher>,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` (no trailing slash).
    pub fn new(
        base_url: impl Into<String>,
        cache: Arc<ResponseCache>,
        fetcher: Arc<dyn Fetcher>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            cache,
            fetcher,
        }
    }

    /// URL of the first location-area page.
    pub fn first_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}/", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}/", self.base_url, name)
    }

    /// Fetches a page of location areas; `None` means the first page.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<LocationAreasPage> {
        let url = match url {
            Some(url) => url.to_string(),
            None => self.first_page_url(),
        };
        self.get_json(&url).await
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        self.get_json(&self.location_area_url(name)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.get_json(&self.pokemon_url(name)).await
    }

    /// Shared cache handle.
    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    // A decode failure leaves the cached bytes in place.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let data = get_or_fetch(&self.cache, self.fetcher.as_ref(), url).await?;
        Ok(serde_json::from_slice(&data)?)
    }
}
