// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据源模块
///
/// 定义访问外部接口的抽象，包括藏品检索的查询参数构建、
/// 藏品数据源接口、作者简介数据源接口以及传输层错误的领域表示
pub mod artwork_source;
pub mod biography_source;
pub mod query;

pub use artwork_source::{ArtworkSource, SourceError};
pub use biography_source::{Biography, BiographyError, BiographySource};
pub use query::CollectionQuery;
