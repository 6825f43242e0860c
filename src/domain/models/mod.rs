// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 藏品（artwork）：上游返回的藏品记录与图片引用
/// - 筛选条件（selection）：作品类型与世纪时期
/// - 统计结果（statistics）：作者计数、排名条目与按世纪分组的数据
///
/// 所有模型都只在单次请求中短暂持有，不做持久化。
pub mod artwork;
pub mod selection;
pub mod statistics;

pub use artwork::{ArtworkRecord, CollectionPage, Dating, ImageRef, NO_IMAGE_PLACEHOLDER};
pub use selection::{Century, Selection, SelectionError, SelectionUpdate, WorkType};
pub use statistics::{CenturyData, GalleryItem, MakerCounts, MaterialComparison, RankedEntry};

/// 搜索页提供的推荐作者
pub const FEATURED_MAKERS: [&str; 6] = [
    "Rembrandt",
    "Vermeer",
    "Van Gogh",
    "Frans Hals",
    "Jan Steen",
    "Jacob van Ruisdael",
];
