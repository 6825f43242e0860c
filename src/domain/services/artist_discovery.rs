// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::models::selection::{Century, WorkType};
use crate::domain::source::{ArtworkSource, CollectionQuery};

pub const DEFAULT_DISCOVERY_PAGE_SIZE: u32 = 100;
pub const DEFAULT_MAX_MAKERS: usize = 20;

/// 作者发现服务
///
/// 取一页带图片的藏品，按出现顺序收集去重后的作者名。
pub struct ArtistDiscovery<S: ?Sized> {
    source: Arc<S>,
    page_size: u32,
    max_makers: usize,
}

impl<S> ArtistDiscovery<S>
where
    S: ArtworkSource + ?Sized,
{
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            page_size: DEFAULT_DISCOVERY_PAGE_SIZE,
            max_makers: DEFAULT_MAX_MAKERS,
        }
    }

    pub fn with_limits(source: Arc<S>, page_size: u32, max_makers: usize) -> Self {
        Self {
            source,
            page_size,
            max_makers,
        }
    }

    /// 发现某类型、某时期的候选作者
    ///
    /// 请求失败时记录日志并返回空列表，不向调用方传播错误。
    pub async fn discover(&self, work_type: WorkType, period: Century) -> Vec<String> {
        let query = CollectionQuery::new()
            .work_type(work_type)
            .page_size(self.page_size)
            .image_only()
            .dating_period(period);

        let page = match self.source.search(&query).await {
            Ok(page) => page,
            Err(e) => {
                warn!(
                    "Artist discovery failed for {} / {}: {}",
                    work_type,
                    period.label(),
                    e
                );
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let makers: Vec<String> = page
            .art_objects
            .iter()
            .filter_map(|record| record.maker_name())
            .filter(|name| seen.insert(name.to_string()))
            .take(self.max_makers)
            .map(str::to_string)
            .collect();

        debug!(
            "Discovered {} makers for {} / {}",
            makers.len(),
            work_type,
            period.label()
        );
        makers
    }
}
