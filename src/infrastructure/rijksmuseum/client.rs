// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use metrics::{counter, histogram};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

use crate::config::settings::RijksmuseumSettings;
use crate::domain::models::artwork::{ArtworkEnvelope, ArtworkRecord, CollectionPage};
use crate::domain::source::{ArtworkSource, CollectionQuery, SourceError};
use crate::infrastructure::metrics::{
    UPSTREAM_FAILURES_TOTAL, UPSTREAM_REQUESTS_TOTAL, UPSTREAM_REQUEST_DURATION,
};

const SOURCE_NAME: &str = "rijksmuseum";

/// Rijksmuseum 藏品接口客户端
///
/// 只负责单次请求与响应解析，不做重试。
pub struct RijksmuseumClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl RijksmuseumClient {
    pub fn new(settings: &RijksmuseumSettings) -> Result<Self, SourceError> {
        Self::with_endpoint(
            &settings.base_url,
            &settings.api_key,
            Duration::from_secs(settings.timeout_secs),
            &settings.user_agent,
        )
    }

    pub fn with_endpoint(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SourceError::NetworkError(format!("Invalid base URL {}: {}", base_url, e)))?;

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// 单件详情地址：`{base}/{object_number}`
    fn artwork_url(&self, object_number: &str) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::NetworkError(format!("Base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .push(object_number);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, SourceError> {
        counter!(UPSTREAM_REQUESTS_TOTAL, "source" => SOURCE_NAME).increment(1);
        let start = Instant::now();

        let result = self.send(url, params).await;

        histogram!(UPSTREAM_REQUEST_DURATION, "source" => SOURCE_NAME)
            .record(start.elapsed().as_secs_f64());
        if let Err(e) = &result {
            counter!(UPSTREAM_FAILURES_TOTAL, "source" => SOURCE_NAME).increment(1);
            warn!("Rijksmuseum request failed: {}", e);
        }

        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, SourceError> {
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| SourceError::NetworkError(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UpstreamError(format!(
                "Rijksmuseum returned status: {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::NetworkError(format!("Failed to read response body: {}", e)))?;

        serde_json::from_slice(&body)
            .map_err(|e| SourceError::UpstreamError(format!("Malformed response payload: {}", e)))
    }
}

#[async_trait]
impl ArtworkSource for RijksmuseumClient {
    async fn search(&self, query: &CollectionQuery) -> Result<CollectionPage, SourceError> {
        self.get_json(self.base_url.clone(), &query.to_params()).await
    }

    async fn fetch_artwork(&self, object_number: &str) -> Result<ArtworkRecord, SourceError> {
        let url = self.artwork_url(object_number)?;
        let envelope: ArtworkEnvelope = self.get_json(url, &[]).await?;
        Ok(envelope.art_object)
    }
}
