// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::state::{reduce, GalleryAction, GalleryState};
use crate::config::settings::AggregationSettings;
use crate::domain::models::selection::{Selection, SelectionUpdate, WorkType};
use crate::domain::models::statistics::{CenturyData, MakerCounts};
use crate::domain::services::artist_discovery::ArtistDiscovery;
use crate::domain::services::century_aggregator::CenturyAggregator;
use crate::domain::services::count_aggregation::CountAggregator;
use crate::domain::source::ArtworkSource;

/// 画廊状态容器
///
/// 持有当前状态和聚合服务，所有状态变化都经过 [`reduce`]。
pub struct GalleryStore {
    state: GalleryState,
    discovery: ArtistDiscovery<dyn ArtworkSource>,
    counts: CountAggregator<dyn ArtworkSource>,
    centuries: CenturyAggregator<dyn ArtworkSource>,
}

impl GalleryStore {
    pub fn new(
        source: Arc<dyn ArtworkSource>,
        settings: &AggregationSettings,
        selection: Selection,
    ) -> Self {
        let discovery = || {
            ArtistDiscovery::with_limits(
                source.clone(),
                settings.discovery_page_size,
                settings.max_makers,
            )
        };

        Self {
            state: GalleryState::new(selection, &settings.periods),
            discovery: discovery(),
            counts: CountAggregator::new(source.clone(), settings.backoff_policy()),
            centuries: CenturyAggregator::new(source.clone(), discovery())
                .with_periods(settings.periods.clone())
                .with_top_n(settings.top_n),
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn selection(&self) -> Selection {
        self.state.selection
    }

    fn dispatch(&mut self, action: GalleryAction) {
        debug!("Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// 合并新的筛选条件，不会自动重新拉取数据
    pub fn update_selection(&mut self, update: SelectionUpdate) {
        let before = self.state.selection;
        self.dispatch(GalleryAction::SelectionUpdated(update));
        info!("Selection changed from {:?} to {:?}", before, self.state.selection);
    }

    /// 按当前筛选条件发现作者并汇总作品数
    pub async fn fetch_data(&mut self) -> &MakerCounts {
        let Selection { work_type, period } = self.state.selection;
        self.dispatch(GalleryAction::FetchStarted);

        let makers = self.discovery.discover(work_type, period).await;
        if makers.is_empty() {
            self.dispatch(GalleryAction::FetchFailed(format!(
                "No makers found for {} in the {}",
                work_type,
                period.label()
            )));
            return &self.state.data;
        }

        let counts = self.counts.aggregate(&makers, work_type, period).await;
        self.dispatch(GalleryAction::DataLoaded(counts));
        &self.state.data
    }

    /// 按世纪汇总排名，结果总是包含全部配置的时期
    pub async fn fetch_century_data(&mut self, work_type: WorkType) -> &CenturyData {
        self.dispatch(GalleryAction::FetchStarted);
        let data = self.centuries.aggregate_by_century(work_type).await;
        self.dispatch(GalleryAction::CenturyDataLoaded(data));
        &self.state.century_data
    }
}
