//! Thin client for the card API (SWAPI-compatible).
//!
//! Every response is cached per URL, so revisiting a page or re-fetching a
//! record during a pack reveal does not hit the network twice.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AlbumError, AlbumResult};
use crate::types::{Film, Person, ResourcePage, Starship};

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://swapi.dev/api";

/// HTTP client with a per-URL response cache
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<RwLock<HashMap<String, serde_json::Value>>>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client against the default API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Client against a custom base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Drop every cached response.
    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    /// Number of cached responses (visibility for tests/UI).
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    /// Seed the cache with a canned response (offline tests).
    #[cfg(test)]
    pub(crate) fn prime_cache(&self, url: impl Into<String>, value: serde_json::Value) {
        self.cache.write().insert(url.into(), value);
    }

    /// GET a URL as JSON, serving from the cache when possible.
    async fn get_json(&self, url: &str) -> AlbumResult<serde_json::Value> {
        if let Some(cached) = self.cache.read().get(url).cloned() {
            debug!(%url, "api cache hit");
            return Ok(cached);
        }

        debug!(%url, "api fetch");
        let response = self.http.get(url).send().await?.error_for_status()?;
        let value: serde_json::Value = response.json().await?;

        self.cache.write().insert(url.to_string(), value.clone());
        Ok(value)
    }

    async fn get_typed<T: DeserializeOwned>(&self, url: &str) -> AlbumResult<T> {
        let value = self.get_json(url).await?;
        serde_json::from_value(value).map_err(|e| AlbumError::Api(e.to_string()))
    }

    fn listing_url(&self, path: &str) -> String {
        format!("{}/{}/", self.base_url, path)
    }

    /// First page of the film listing.
    pub async fn get_films(&self) -> AlbumResult<ResourcePage<Film>> {
        self.get_typed(&self.listing_url("films")).await
    }

    /// First page of the character listing.
    pub async fn get_people(&self) -> AlbumResult<ResourcePage<Person>> {
        self.get_typed(&self.listing_url("people")).await
    }

    /// First page of the starship listing.
    pub async fn get_starships(&self) -> AlbumResult<ResourcePage<Starship>> {
        self.get_typed(&self.listing_url("starships")).await
    }

    /// Full listing, following `next` links until exhausted.
    async fn fetch_all<T: DeserializeOwned>(&self, path: &str) -> AlbumResult<Vec<T>> {
        let mut url = self.listing_url(path);
        let mut items = Vec::new();

        loop {
            let page: ResourcePage<T> = self.get_typed(&url).await?;
            items.extend(page.results);
            match page.next {
                Some(next) => url = next,
                None => break,
            }
        }

        Ok(items)
    }

    /// Every film known to the API.
    pub async fn fetch_all_films(&self) -> AlbumResult<Vec<Film>> {
        self.fetch_all("films").await
    }

    /// Every character known to the API.
    pub async fn fetch_all_people(&self) -> AlbumResult<Vec<Person>> {
        self.fetch_all("people").await
    }

    /// Every starship known to the API.
    pub async fn fetch_all_starships(&self) -> AlbumResult<Vec<Starship>> {
        self.fetch_all("starships").await
    }

    /// Re-fetch a single record by its canonical URL (fresh details for a
    /// pack reveal).
    pub async fn fetch_resource_by_url<T: DeserializeOwned>(&self, url: &str) -> AlbumResult<T> {
        self.get_typed(url).await
    }
}

/// Parse the numeric id from a record URL (`.../people/7/` -> 7).
pub fn resource_id_from_url(url: &str) -> AlbumResult<u32> {
    url.split('/')
        .filter(|part| !part.is_empty())
        .next_back()
        .and_then(|part| part.parse::<u32>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| AlbumError::InvalidResourceUrl(url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_from_url() {
        assert_eq!(
            resource_id_from_url("https://swapi.dev/api/people/7/").unwrap(),
            7
        );
        assert_eq!(
            resource_id_from_url("https://swapi.dev/api/starships/12").unwrap(),
            12
        );
    }

    #[test]
    fn test_resource_id_from_bad_url() {
        assert!(resource_id_from_url("https://swapi.dev/api/people/").is_err());
        assert!(resource_id_from_url("https://swapi.dev/api/people/luke/").is_err());
        assert!(resource_id_from_url("").is_err());
        // Slot ids are 1-based; a zero id is malformed
        assert!(resource_id_from_url("https://swapi.dev/api/people/0/").is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let client = ApiClient::with_base_url("http://localhost:1234/api/");
        assert_eq!(client.base_url(), "http://localhost:1234/api");
        assert_eq!(client.listing_url("films"), "http://localhost:1234/api/films/");
    }

    #[test]
    fn test_cache_starts_empty_and_clears() {
        let client = ApiClient::new();
        assert_eq!(client.cache_len(), 0);
        client.prime_cache("u", serde_json::json!({"ok": true}));
        assert_eq!(client.cache_len(), 1);
        client.clear_cache();
        assert_eq!(client.cache_len(), 0);
    }

    #[tokio::test]
    async fn test_fetch_all_follows_next_links() {
        let client = ApiClient::with_base_url("http://invalid.localdomain/api");
        let page_one = client.listing_url("people");
        let page_two = "http://invalid.localdomain/api/people/?page=2";

        client.prime_cache(
            page_one,
            serde_json::json!({
                "count": 3,
                "next": page_two,
                "previous": null,
                "results": [
                    { "name": "Luke Skywalker", "url": "http://invalid.localdomain/api/people/1/" },
                    { "name": "C-3PO", "url": "http://invalid.localdomain/api/people/2/" },
                ]
            }),
        );
        client.prime_cache(
            page_two,
            serde_json::json!({
                "count": 3,
                "next": null,
                "previous": "http://invalid.localdomain/api/people/",
                "results": [
                    { "name": "R2-D2", "url": "http://invalid.localdomain/api/people/3/" },
                ]
            }),
        );

        let people = client.fetch_all_people().await.unwrap();
        assert_eq!(people.len(), 3);
        assert_eq!(people[0].name, "Luke Skywalker");
        assert_eq!(people[2].name, "R2-D2");
    }

    #[tokio::test]
    async fn test_fetch_all_surfaces_bad_next_link() {
        // Page 1 points at a page that cannot be fetched; the loop must
        // report the failure instead of spinning.
        let client = ApiClient::with_base_url("http://invalid.localdomain/api");
        client.prime_cache(
            client.listing_url("people"),
            serde_json::json!({
                "count": 2,
                "next": "http://invalid.localdomain/api/people/?page=2",
                "previous": null,
                "results": [
                    { "name": "Luke Skywalker", "url": "http://invalid.localdomain/api/people/1/" },
                ]
            }),
        );

        let err = client.fetch_all_people().await.unwrap_err();
        assert!(matches!(err, AlbumError::Http(_)));
    }

    #[tokio::test]
    async fn test_cached_response_served_without_network() {
        // A URL that can't resolve; only the cache can answer.
        let client = ApiClient::with_base_url("http://invalid.localdomain/api");
        let url = client.listing_url("films");
        let page = serde_json::json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "title": "A New Hope",
                "episode_id": 4,
                "url": "http://invalid.localdomain/api/films/1/"
            }]
        });
        client.prime_cache(url, page);

        let films = client.get_films().await.unwrap();
        assert_eq!(films.count, 1);
        assert_eq!(films.results[0].title, "A New Hope");
    }
}
