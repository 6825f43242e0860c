// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：藏品、筛选条件和统计结果
/// - 数据源接口（source）：藏品检索与作者简介的抽象接口
/// - 服务（services）：作者发现、计数聚合、排名等领域服务
///
/// 领域层不依赖于任何具体的HTTP实现，
/// 体现了纯粹的聚合与排名规则。
pub mod models;
pub mod services;
pub mod source;
