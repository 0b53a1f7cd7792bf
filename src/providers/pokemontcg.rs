use async_trait::async_trait;
use log::info;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

use crate::normalizer::{normalize, NormalizedPage};
use crate::providers::{AbstractProvider, BaseProvider, ProviderError, ProviderResult};
use crate::settings::{PtcgConfig, MAX_PAGE_SIZE};

/// Parameters of one `/cards` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    pub page: u32,
    pub page_size: u32,
    /// Lucene-like search, e.g. `name:pikachu set.id:base1`
    pub q: Option<String>,
    pub order_by: Option<String>,
}

impl CardQuery {
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            q: None,
            order_by: None,
        }
    }

    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn with_order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }
}

/// Client for the Pokémon TCG card catalog
pub struct PokemonTcgProvider {
    base: BaseProvider,
    config: PtcgConfig,
}

impl PokemonTcgProvider {
    pub fn new(config: PtcgConfig) -> ProviderResult<Self> {
        let headers = build_http_header(&config);
        let base = BaseProvider::new(
            "pokemontcg".to_string(),
            headers,
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(Self { base, config })
    }

    pub fn config(&self) -> &PtcgConfig {
        &self.config
    }

    /// Query for the given page using the configured page size
    pub fn default_query(&self, page: u32) -> CardQuery {
        CardQuery::page(page, self.config.page_size)
    }

    pub fn build_cards_url(&self, query: &CardQuery) -> ProviderResult<Url> {
        if query.page == 0 || query.page_size == 0 || query.page_size > MAX_PAGE_SIZE {
            return Err(ProviderError::ConfigurationError(format!(
                "page {} / pageSize {} out of range",
                query.page, query.page_size
            )));
        }

        let mut url = Url::parse(&format!("{}/cards", self.config.base_url))
            .map_err(|e| ProviderError::ConfigurationError(format!("Bad base URL: {}", e)))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &query.page.to_string());
            pairs.append_pair("pageSize", &query.page_size.to_string());
            if let Some(q) = &query.q {
                pairs.append_pair("q", q);
            }
            if let Some(order_by) = &query.order_by {
                pairs.append_pair("orderBy", order_by);
            }
        }
        Ok(url)
    }

    /// Download one page of cards as raw JSON
    pub async fn fetch_cards(&self, query: &CardQuery) -> ProviderResult<Value> {
        let url = self.build_cards_url(query)?;
        self.download(url.as_str(), None).await
    }

    /// Download and normalize one page of cards
    pub async fn fetch_normalized_cards(&self, query: &CardQuery) -> ProviderResult<NormalizedPage> {
        let raw = self.fetch_cards(query).await?;
        let normalized = normalize(&raw)?;
        info!(
            "Fetched page {} with {} cards ({} skipped)",
            query.page,
            normalized.page.count(),
            normalized.skipped.len()
        );
        Ok(normalized)
    }
}

#[async_trait]
impl AbstractProvider for PokemonTcgProvider {
    fn get_class_id(&self) -> &str {
        &self.base.class_id
    }

    fn build_http_header(&self) -> HashMap<String, String> {
        self.base.headers.clone()
    }

    async fn download(
        &self,
        url: &str,
        params: Option<HashMap<String, String>>,
    ) -> ProviderResult<Value> {
        self.base.download_json(url, params).await
    }
}

/// Construct the API key header; empty when no key is configured
pub fn build_http_header(config: &PtcgConfig) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    if let Some(api_key) = &config.api_key {
        headers.insert("X-Api-Key".to_string(), api_key.clone());
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(api_key: Option<&str>) -> PokemonTcgProvider {
        let config = PtcgConfig {
            api_key: api_key.map(str::to_string),
            ..PtcgConfig::default()
        };
        PokemonTcgProvider::new(config).unwrap()
    }

    #[test]
    fn test_headers() {
        assert!(provider(None).build_http_header().is_empty());
        let headers = provider(Some("k3y")).build_http_header();
        assert_eq!(headers.get("X-Api-Key").map(String::as_str), Some("k3y"));
    }

    #[test]
    fn test_cards_url() {
        let provider = provider(None);
        let query = CardQuery::page(2, 20)
            .with_search("name:pikachu set.id:base1")
            .with_order_by("-set.releaseDate");
        let url = provider.build_cards_url(&query).unwrap();
        assert_eq!(url.path(), "/v2/cards");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("pageSize".to_string(), "20".to_string()),
                ("q".to_string(), "name:pikachu set.id:base1".to_string()),
                ("orderBy".to_string(), "-set.releaseDate".to_string()),
            ]
        );
    }

    #[test]
    fn test_out_of_range_query() {
        let provider = provider(None);
        assert!(provider.build_cards_url(&CardQuery::page(0, 10)).is_err());
        assert!(provider.build_cards_url(&CardQuery::page(1, 251)).is_err());
        assert_eq!(provider.default_query(3), CardQuery::page(3, 250));
    }

    #[test]
    fn test_class_id() {
        assert_eq!(provider(None).get_class_id(), "pokemontcg");
    }
}
