// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::selection::{Century, WorkType};

/// 藏品检索查询
///
/// 只有设置过的字段才会出现在请求参数中，`key` 由客户端追加。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionQuery {
    pub text: Option<String>,
    pub work_type: Option<WorkType>,
    pub page_size: Option<u32>,
    pub image_only: bool,
    pub dating_period: Option<Century>,
    pub involved_maker: Option<String>,
    pub material: Option<String>,
    pub top_pieces: bool,
}

impl CollectionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn work_type(mut self, work_type: WorkType) -> Self {
        self.work_type = Some(work_type);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn image_only(mut self) -> Self {
        self.image_only = true;
        self
    }

    pub fn dating_period(mut self, period: Century) -> Self {
        self.dating_period = Some(period);
        self
    }

    pub fn involved_maker(mut self, maker: impl Into<String>) -> Self {
        self.involved_maker = Some(maker.into());
        self
    }

    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn top_pieces(mut self) -> Self {
        self.top_pieces = true;
        self
    }

    /// 转换为上游接口的查询参数
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(text) = &self.text {
            params.push(("q", text.clone()));
        }
        if let Some(work_type) = self.work_type {
            params.push(("type", work_type.as_str().to_string()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("ps", page_size.to_string()));
        }
        if self.image_only {
            params.push(("imgonly", "true".to_string()));
        }
        if let Some(period) = self.dating_period {
            params.push(("f.dating.period", period.to_string()));
        }
        if let Some(maker) = &self.involved_maker {
            params.push(("involvedMaker", maker.clone()));
        }
        if let Some(material) = &self.material {
            params.push(("material", material.clone()));
        }
        if self.top_pieces {
            params.push(("toppieces", "true".to_string()));
        }

        params
    }
}
