// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use metrics::counter;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::settings::WikipediaSettings;
use crate::domain::models::artwork::ImageRef;
use crate::domain::source::{Biography, BiographyError, BiographySource};
use crate::infrastructure::metrics::{UPSTREAM_FAILURES_TOTAL, UPSTREAM_REQUESTS_TOTAL};

const SOURCE_NAME: &str = "wikipedia";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    title: String,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: Option<String>,
}

/// 维基百科简介客户端
///
/// 先用检索接口找到最匹配的页面标题，再读取该页面的摘要。
pub struct WikipediaClient {
    client: Client,
    search_url: String,
    summary_url: String,
}

impl WikipediaClient {
    pub fn new(settings: &WikipediaSettings, user_agent: &str) -> Result<Self, BiographyError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| BiographyError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            search_url: settings.search_url.clone(),
            summary_url: settings.summary_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, BiographyError> {
        counter!(UPSTREAM_REQUESTS_TOTAL, "source" => SOURCE_NAME).increment(1);
        let result = async {
            let response = request
                .send()
                .await
                .map_err(|e| BiographyError::NetworkError(format!("HTTP request failed: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(BiographyError::UpstreamError(format!(
                    "Wikipedia returned status: {}",
                    status
                )));
            }

            response
                .json::<T>()
                .await
                .map_err(|e| BiographyError::UpstreamError(format!("Malformed response payload: {}", e)))
        }
        .await;

        if result.is_err() {
            counter!(UPSTREAM_FAILURES_TOTAL, "source" => SOURCE_NAME).increment(1);
        }
        result
    }

    async fn search_title(&self, name: &str) -> Result<Option<String>, BiographyError> {
        let request = self.client.get(&self.search_url).query(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", name),
            ("format", "json"),
        ]);
        let response: SearchResponse = self.get(request).await?;

        Ok(response
            .query
            .and_then(|q| q.search.into_iter().next())
            .map(|hit| hit.title))
    }

    async fn summary(&self, title: &str) -> Result<SummaryResponse, BiographyError> {
        let url = format!("{}/{}", self.summary_url, urlencoding::encode(title));
        self.get(self.client.get(url)).await
    }
}

#[async_trait]
impl BiographySource for WikipediaClient {
    async fn lookup(&self, name: &str) -> Result<Option<Biography>, BiographyError> {
        let Some(title) = self.search_title(name).await? else {
            debug!("No Wikipedia page found for {}", name);
            return Ok(None);
        };

        let summary = self.summary(&title).await?;
        Ok(Some(Biography {
            title: summary.title,
            extract: summary.extract,
            thumbnail: ImageRef::from_url(summary.thumbnail.and_then(|t| t.source)),
        }))
    }
}
