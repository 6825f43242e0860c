// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::selection::{Century, WorkType};
use crate::domain::models::statistics::{CenturyData, MakerCounts};
use crate::domain::services::artist_discovery::ArtistDiscovery;
use crate::domain::services::ranking::{self, DEFAULT_TOP_N};
use crate::domain::source::{ArtworkSource, CollectionQuery};

pub const DEFAULT_PERIODS: [Century; 3] = Century::DEFAULT_PERIODS;

/// 按世纪聚合作者排名
///
/// 依次处理每个时期：发现作者、逐个读取作品总数、排名。
/// 全程串行，最多 时期数 × 作者上限 次请求，中途不可取消。
pub struct CenturyAggregator<S: ?Sized> {
    source: Arc<S>,
    discovery: ArtistDiscovery<S>,
    periods: Vec<Century>,
    top_n: usize,
}

impl<S> CenturyAggregator<S>
where
    S: ArtworkSource + ?Sized,
{
    pub fn new(source: Arc<S>, discovery: ArtistDiscovery<S>) -> Self {
        Self {
            source,
            discovery,
            periods: DEFAULT_PERIODS.to_vec(),
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_periods(mut self, periods: Vec<Century>) -> Self {
        self.periods = periods;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn periods(&self) -> &[Century] {
        &self.periods
    }

    pub async fn aggregate_by_century(&self, work_type: WorkType) -> CenturyData {
        let mut data = CenturyData::with_periods(&self.periods);

        for &period in &self.periods {
            let makers = self.discovery.discover(work_type, period).await;

            let mut counts = MakerCounts::new();
            for maker in &makers {
                if let Some(count) = self.fetch_single_count(maker, work_type, period).await {
                    counts.insert(maker.as_str(), count);
                }
            }

            let ranked = ranking::rank(&counts, self.top_n);
            info!(
                "{}: {} makers discovered, {} counted, {} ranked",
                period.label(),
                makers.len(),
                counts.len(),
                ranked.len()
            );
            data.insert(period, ranked);
        }

        data
    }

    /// 以 `ps=1` 查询单件作品，只读取上游报告的总数
    async fn fetch_single_count(
        &self,
        maker: &str,
        work_type: WorkType,
        period: Century,
    ) -> Option<u64> {
        let query = CollectionQuery::new()
            .involved_maker(maker)
            .work_type(work_type)
            .dating_period(period)
            .page_size(1);

        match self.source.search(&query).await {
            Ok(page) => Some(page.count),
            Err(e) => {
                warn!(
                    "Count lookup failed for {} in {}: {}",
                    maker,
                    period.label(),
                    e
                );
                None
            }
        }
    }
}
