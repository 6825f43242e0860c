// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::models::artwork::ImageRef;
use crate::domain::models::statistics::CenturyData;
use crate::domain::source::BiographySource;

pub const BIOGRAPHY_UNAVAILABLE: &str = "Biography not available.";

/// 传记卡片
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistBiography {
    pub name: String,
    pub count: u64,
    pub bio: String,
    pub image: ImageRef,
}

/// 作者传记服务
pub struct BiographyService<B: ?Sized> {
    source: Arc<B>,
}

impl<B> BiographyService<B>
where
    B: BiographySource + ?Sized,
{
    pub fn new(source: Arc<B>) -> Self {
        Self { source }
    }

    /// 按时期顺序、排名顺序为每位入选作者查询简介
    ///
    /// 查询失败或没有匹配页面时使用占位文本，不会返回错误。
    pub async fn biographies(&self, century_data: &CenturyData) -> Vec<ArtistBiography> {
        let mut cards = Vec::new();

        for (label, entries) in century_data.iter() {
            for entry in entries {
                let card = match self.source.lookup(&entry.name).await {
                    Ok(Some(biography)) => {
                        debug!("Found biography page {} for {}", biography.title, entry.name);
                        ArtistBiography {
                            name: entry.name.clone(),
                            count: entry.count,
                            bio: biography.extract,
                            image: biography.thumbnail,
                        }
                    }
                    Ok(None) => {
                        debug!("No biography page for {} ({})", entry.name, label);
                        Self::unavailable(&entry.name, entry.count)
                    }
                    Err(e) => {
                        warn!("Biography lookup failed for {}: {}", entry.name, e);
                        Self::unavailable(&entry.name, entry.count)
                    }
                };
                cards.push(card);
            }
        }

        cards
    }

    fn unavailable(name: &str, count: u64) -> ArtistBiography {
        ArtistBiography {
            name: name.to_string(),
            count,
            bio: BIOGRAPHY_UNAVAILABLE.to_string(),
            image: ImageRef::Missing,
        }
    }
}
