// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::models::selection::{Century, WorkType};
use crate::domain::models::statistics::MakerCounts;
use crate::domain::source::{ArtworkSource, CollectionQuery};
use crate::utils::retry_policy::BackoffPolicy;

/// 作者作品数聚合服务
///
/// 对每位作者依次发起一次计数查询。请求严格串行，
/// 每次请求前按线性退避状态等待，以免触发上游限流。
pub struct CountAggregator<S: ?Sized> {
    source: Arc<S>,
    backoff: BackoffPolicy,
}

impl<S> CountAggregator<S>
where
    S: ArtworkSource + ?Sized,
{
    pub fn new(source: Arc<S>, backoff: BackoffPolicy) -> Self {
        Self { source, backoff }
    }

    /// 汇总每位作者在该类型、该时期下的作品总数
    ///
    /// 单个作者失败时不写入该作者（而不是记为0），并把后续等待时间加长；
    /// 任何成功都会把等待时间恢复为初始值。
    pub async fn aggregate(
        &self,
        makers: &[String],
        work_type: WorkType,
        period: Century,
    ) -> MakerCounts {
        let mut counts = MakerCounts::new();
        let mut backoff = self.backoff.start();

        for maker in makers {
            let delay = backoff.delay();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let query = CollectionQuery::new()
                .involved_maker(maker.as_str())
                .work_type(work_type)
                .dating_period(period);

            match self.source.search(&query).await {
                Ok(page) => {
                    debug!("Maker {} has {} works", maker, page.count);
                    counts.insert(maker.as_str(), page.count);
                    backoff.record_success();
                }
                Err(e) => {
                    backoff.record_failure();
                    warn!(
                        "Count query failed for maker {}: {} (next delay {:?})",
                        maker,
                        e,
                        backoff.delay()
                    );
                }
            }
        }

        counts
    }
}
