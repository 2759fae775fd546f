use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::{HttpFetcher, HttpResponse};

pub struct ReqwestHttpFetcher {
    client: reqwest::Client,
}

impl ReqwestHttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

fn redact_api_key(url: &str) -> String {
    let Ok(mut parsed) = reqwest::Url::parse(url) else {
        return "<unparseable url>".to_string();
    };

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" {
                "REDACTED".to_string()
            } else {
                value.into_owned()
            };
            (name.into_owned(), value)
        })
        .collect();

    if !pairs.is_empty() {
        parsed.query_pairs_mut().clear().extend_pairs(pairs);
    }

    parsed.to_string()
}

#[async_trait]
impl HttpFetcher for ReqwestHttpFetcher {
    async fn fetch(&self, url: &str) -> Result<HttpResponse> {
        log::debug!("[HTTP] GET {}", redact_api_key(url));

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Search request could not be sent")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Search response body could not be read")?;

        log::debug!("[HTTP] status={}, body={} bytes", status, body.len());

        Ok(HttpResponse { status, body })
    }
}
