use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::core::interfaces::adapters::{HttpFetcher, SearchProvider};
use crate::core::models::{ResultList, SearchConfig, SearchEnvelope};

pub struct GoogleCustomSearchProvider {
    http_fetcher: Arc<dyn HttpFetcher>,
    config: SearchConfig,
}

impl GoogleCustomSearchProvider {
    pub fn new(http_fetcher: Arc<dyn HttpFetcher>, config: SearchConfig) -> Self {
        Self {
            http_fetcher,
            config,
        }
    }

    fn construct_search_url(&self, query: &str) -> String {
        format!(
            "{}?key={}&cx={}&q={}",
            self.config.api_base_url,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(&self.config.search_engine_id),
            urlencoding::encode(query)
        )
    }

    fn parse_results(body: &str) -> ResultList {
        match serde_json::from_str::<SearchEnvelope>(body) {
            Ok(envelope) => envelope.into_result_list(),
            Err(e) => {
                log::warn!("[SEARCH] Unreadable response body, treating as no results: {}", e);
                ResultList::empty()
            }
        }
    }
}

#[async_trait]
impl SearchProvider for GoogleCustomSearchProvider {
    async fn fetch_results(&self, query: &str) -> Result<ResultList> {
        let search_url = self.construct_search_url(query);

        log::info!("[SEARCH] Requesting custom search results");
        log::debug!("[SEARCH] Query: {}", query);

        let response = self.http_fetcher.fetch(&search_url).await?;

        if !response.is_success() {
            log::error!("[SEARCH] Search API returned status {}", response.status);
            anyhow::bail!("Search request failed with status {}", response.status);
        }

        let results = Self::parse_results(&response.body);
        log::info!("[SEARCH] Received {} results", results.len());

        Ok(results)
    }
}
