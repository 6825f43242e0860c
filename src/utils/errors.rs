// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::source::{BiographyError, SourceError};

/// 应用层错误类型
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("数据源错误: {0}")]
    Source(#[from] SourceError),

    #[error("简介接口错误: {0}")]
    Biography(#[from] BiographyError),

    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("配置校验失败: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
