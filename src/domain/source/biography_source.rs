// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::artwork::ImageRef;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BiographyError {
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Upstream error: {0}")]
    UpstreamError(String),
}

/// 作者简介
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biography {
    pub title: String,
    pub extract: String,
    pub thumbnail: ImageRef,
}

#[async_trait]
pub trait BiographySource: Send + Sync {
    /// Look up a biography for the given maker name, `None` when no page matches
    async fn lookup(&self, name: &str) -> Result<Option<Biography>, BiographyError>;
}
