// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::models::artwork::ArtworkRecord;
use crate::domain::models::selection::Century;
use crate::domain::models::statistics::{GalleryItem, MakerCounts};
use crate::domain::source::{ArtworkSource, CollectionQuery, SourceError};

pub const MAKER_WORKS_PAGE_SIZE: u32 = 100;
pub const COLLECTION_PAGE_SIZE: u32 = 100;

/// 藏品浏览服务
///
/// 单件详情、作者作品列表和藏品作者分布会把错误返回给调用方；
/// 画廊按作者逐个取代表作，失败的作者直接跳过。
pub struct CollectionService<S: ?Sized> {
    source: Arc<S>,
}

impl<S> CollectionService<S>
where
    S: ArtworkSource + ?Sized,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn fetch_artwork(&self, object_number: &str) -> Result<ArtworkRecord, SourceError> {
        self.source.fetch_artwork(object_number).await
    }

    /// 按作者名全文检索作品
    pub async fn fetch_artworks_by_maker(
        &self,
        maker: &str,
    ) -> Result<Vec<ArtworkRecord>, SourceError> {
        let query = CollectionQuery::new()
            .text(maker)
            .page_size(MAKER_WORKS_PAGE_SIZE);
        let page = self.source.search(&query).await?;
        debug!("Found {} artworks for {}", page.art_objects.len(), maker);
        Ok(page.art_objects)
    }

    /// 一页精选藏品，首页轮播直接展示这些记录
    pub async fn fetch_collections(&self) -> Result<Vec<ArtworkRecord>, SourceError> {
        let query = CollectionQuery::new()
            .top_pieces()
            .page_size(COLLECTION_PAGE_SIZE);
        let page = self.source.search(&query).await?;
        debug!("Fetched {} top pieces", page.art_objects.len());
        Ok(page.art_objects)
    }

    /// 统计一页精选藏品中各作者出现的次数
    pub async fn maker_distribution(&self) -> Result<MakerCounts, SourceError> {
        let records = self.fetch_collections().await?;
        Ok(tally_makers(&records))
    }

    /// 为每位作者取一件带图片的代表作
    pub async fn fetch_gallery(&self, makers: &[String], period: Century) -> Vec<GalleryItem> {
        let mut gallery = Vec::with_capacity(makers.len());

        for maker in makers {
            let query = CollectionQuery::new()
                .involved_maker(maker.as_str())
                .dating_period(period)
                .top_pieces()
                .image_only()
                .page_size(1);

            match self.source.search(&query).await {
                Ok(page) => match page.art_objects.into_iter().next() {
                    Some(artwork) => gallery.push(GalleryItem {
                        maker: maker.clone(),
                        artwork,
                    }),
                    None => debug!("No top piece for {} in {}", maker, period.label()),
                },
                Err(e) => warn!("Gallery lookup failed for {}: {}", maker, e),
            }
        }

        gallery
    }
}

/// 按 `principalOrFirstMaker` 计数，缺失作者的记录忽略
pub fn tally_makers(records: &[ArtworkRecord]) -> MakerCounts {
    let mut counts = MakerCounts::new();
    for maker in records.iter().filter_map(ArtworkRecord::maker_name) {
        counts.increment(maker);
    }
    counts
}
