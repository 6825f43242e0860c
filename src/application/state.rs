// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::selection::{Century, Selection, SelectionUpdate};
use crate::domain::models::statistics::{CenturyData, MakerCounts};

/// 画廊的共享状态
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryState {
    pub selection: Selection,
    /// 当前筛选条件下每位作者的作品数
    pub data: MakerCounts,
    pub century_data: CenturyData,
    pub loading: bool,
    pub last_error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(Selection::default(), &Century::DEFAULT_PERIODS)
    }
}

impl GalleryState {
    /// 初始状态，`periods` 中的每个时期都以空排名出现
    pub fn new(selection: Selection, periods: &[Century]) -> Self {
        Self {
            selection,
            data: MakerCounts::new(),
            century_data: CenturyData::with_periods(periods),
            loading: false,
            last_error: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    SelectionUpdated(SelectionUpdate),
    FetchStarted,
    DataLoaded(MakerCounts),
    CenturyDataLoaded(CenturyData),
    FetchFailed(String),
}

/// 纯函数形式的状态迁移
///
/// 失败时保留上一次成功加载的数据，只记录错误信息。
pub fn reduce(state: GalleryState, action: GalleryAction) -> GalleryState {
    match action {
        GalleryAction::SelectionUpdated(update) => GalleryState {
            selection: state.selection.merge(update),
            ..state
        },
        GalleryAction::FetchStarted => GalleryState {
            loading: true,
            last_error: None,
            ..state
        },
        GalleryAction::DataLoaded(data) => GalleryState {
            data,
            loading: false,
            updated_at: Some(Utc::now()),
            ..state
        },
        GalleryAction::CenturyDataLoaded(century_data) => GalleryState {
            century_data,
            loading: false,
            updated_at: Some(Utc::now()),
            ..state
        },
        GalleryAction::FetchFailed(message) => GalleryState {
            loading: false,
            last_error: Some(message),
            ..state
        },
    }
}
