use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ResultList;

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn fetch_results(&self, query: &str) -> Result<ResultList>;
}
