// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 无图片时的占位图地址
pub const NO_IMAGE_PLACEHOLDER: &str = "/static/no-image.svg";

/// 上游返回的图片描述
#[derive(Debug, Clone, Deserialize)]
struct WebImageWire {
    url: Option<String>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
}

/// 图片引用
///
/// 上游的 `webImage` 可能为 `null`，或者带一个空的 `url`，
/// 这两种情况都归一为 [`ImageRef::Missing`]。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<WebImageWire>", into = "Option<ImageUrl>")]
pub enum ImageRef {
    Available {
        url: String,
        width: Option<u32>,
        height: Option<u32>,
    },
    #[default]
    Missing,
}

/// 序列化时对外暴露的图片形状
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ImageUrl {
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
}

impl From<Option<WebImageWire>> for ImageRef {
    fn from(wire: Option<WebImageWire>) -> Self {
        match wire {
            Some(WebImageWire {
                url: Some(url),
                width,
                height,
            }) if !url.trim().is_empty() => ImageRef::Available { url, width, height },
            _ => ImageRef::Missing,
        }
    }
}

impl From<ImageRef> for Option<ImageUrl> {
    fn from(image: ImageRef) -> Self {
        match image {
            ImageRef::Available { url, width, height } => Some(ImageUrl { url, width, height }),
            ImageRef::Missing => None,
        }
    }
}

impl ImageRef {
    /// 根据可选的URL构建图片引用
    pub fn from_url(url: Option<String>) -> Self {
        Self::from(url.map(|url| WebImageWire {
            url: Some(url),
            width: None,
            height: None,
        }))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ImageRef::Available { .. })
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            ImageRef::Available { url, .. } => Some(url),
            ImageRef::Missing => None,
        }
    }

    /// 渲染用的图片地址，没有图片时返回 `fallback`
    pub fn url_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.url().unwrap_or(fallback)
    }
}

/// 作品年代信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dating {
    pub presenting_date: Option<String>,
    pub sorting_date: Option<i32>,
    pub period: Option<u8>,
}

/// 藏品记录
///
/// 检索结果和单件详情共用此结构，详情接口会额外带上 `description` 和 `dating`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkRecord {
    pub id: String,
    #[serde(default)]
    pub object_number: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "principalOrFirstMaker", default)]
    pub maker: Option<String>,
    #[serde(rename = "webImage", default)]
    pub image: ImageRef,
    #[serde(default)]
    pub long_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dating: Option<Dating>,
}

impl ArtworkRecord {
    /// 去除空白后的作者名，空字符串视为缺失
    pub fn maker_name(&self) -> Option<&str> {
        self.maker
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// 展示用的描述文本，优先使用详情描述
    pub fn descriptive_text(&self) -> Option<&str> {
        self.description.as_deref().or(self.long_title.as_deref())
    }
}

/// 检索接口返回的一页结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    #[serde(default)]
    pub art_objects: Vec<ArtworkRecord>,
    /// 上游报告的匹配总数，与分页大小无关
    #[serde(default)]
    pub count: u64,
}

/// 单件详情接口的响应包装
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkEnvelope {
    pub art_object: ArtworkRecord,
}
