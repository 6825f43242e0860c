// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::artwork::{ArtworkRecord, CollectionPage};
use crate::domain::source::query::CollectionQuery;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    /// 请求未能发出或响应未能读取
    #[error("Network error: {0}")]
    NetworkError(String),
    /// 非2xx状态码或无法解析的响应体
    #[error("Upstream error: {0}")]
    UpstreamError(String),
}

#[async_trait]
pub trait ArtworkSource: Send + Sync {
    /// Run a collection search and return one page of results
    async fn search(&self, query: &CollectionQuery) -> Result<CollectionPage, SourceError>;

    /// Fetch a single artwork by its object number
    async fn fetch_artwork(&self, object_number: &str) -> Result<ArtworkRecord, SourceError>;
}
