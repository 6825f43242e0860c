// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含与外部系统交互的具体实现，依赖于领域层的抽象接口。
///
/// 包含的子模块：
/// - 指标（metrics）：Prometheus 导出器和上游请求指标
/// - 藏品接口（rijksmuseum）：基于 reqwest 的藏品检索客户端
/// - 简介接口（wikipedia）：基于 reqwest 的作者简介客户端
pub mod metrics;
pub mod rijksmuseum;
pub mod wikipedia;
