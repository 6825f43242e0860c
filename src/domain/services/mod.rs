// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心聚合逻辑，这些服务只依赖数据源抽象，
/// 按固定顺序串行访问上游接口。
///
/// 包含的服务：
/// - 作者发现（artist_discovery）：从一页藏品中收集去重后的候选作者
/// - 计数聚合（count_aggregation）：逐个作者读取作品总数，失败时线性退避
/// - 排名（ranking）：计算占比、排序并截取前N位
/// - 世纪聚合（century_aggregator）：对每个世纪执行发现、计数与排名
/// - 材质对比（material_comparison）：材质 × 世纪 的作品数
/// - 藏品浏览（collection_service）：单件详情、作者作品、画廊与作者分布
/// - 传记（biography_service）：为入选作者查询简介
///
/// 单项失败一律降级为空或缺省结果，只有直接的读取操作才返回错误。
pub mod artist_discovery;
pub mod biography_service;
pub mod century_aggregator;
pub mod collection_service;
pub mod count_aggregation;
pub mod material_comparison;
pub mod ranking;

#[cfg(test)]
pub(crate) mod test_support;
