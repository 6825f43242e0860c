// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含画廊的共享状态、纯函数状态迁移，以及驱动聚合服务的状态容器
pub mod state;
pub mod store;

pub use state::{reduce, GalleryAction, GalleryState};
pub use store::GalleryStore;
