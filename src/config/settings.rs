// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

use crate::domain::models::selection::{Century, WorkType};
use crate::utils::retry_policy::BackoffPolicy;

/// 应用程序配置设置
///
/// 包含藏品接口、简介接口、聚合参数、日志和指标等所有配置项
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// 藏品接口配置
    #[validate(nested)]
    pub rijksmuseum: RijksmuseumSettings,
    /// 作者简介接口配置
    #[validate(nested)]
    pub wikipedia: WikipediaSettings,
    /// 聚合参数配置
    #[validate(nested)]
    pub aggregation: AggregationSettings,
    /// 默认筛选条件
    pub selection: SelectionSettings,
    /// 日志配置
    pub telemetry: TelemetrySettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 藏品接口配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RijksmuseumSettings {
    /// 检索接口地址
    #[validate(url)]
    pub base_url: String,
    /// 接口密钥
    #[validate(length(min = 1, message = "rijksmuseum.api_key must be set"))]
    pub api_key: String,
    /// 单次请求超时时间（秒）
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
    /// 请求使用的 User-Agent
    pub user_agent: String,
}

/// 作者简介接口配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WikipediaSettings {
    /// MediaWiki 检索接口地址
    #[validate(url)]
    pub search_url: String,
    /// 页面摘要接口地址
    #[validate(url)]
    pub summary_url: String,
    /// 单次请求超时时间（秒）
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

/// 聚合参数配置设置
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AggregationSettings {
    /// 作者发现时请求的页大小
    #[validate(range(min = 1, max = 100))]
    pub discovery_page_size: u32,
    /// 每次发现保留的作者上限
    #[validate(range(min = 1))]
    pub max_makers: usize,
    /// 每个时期保留的排名数
    #[validate(range(min = 1))]
    pub top_n: usize,
    /// 计数请求前的初始等待（毫秒）
    pub initial_delay_ms: u64,
    /// 每次失败追加的等待（毫秒）
    pub backoff_step_ms: u64,
    /// 参与按世纪聚合的时期
    #[validate(length(min = 1))]
    pub periods: Vec<Century>,
}

/// 默认筛选条件设置
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SelectionSettings {
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub period: Century,
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// 是否输出 JSON 格式日志
    pub json: bool,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启动 Prometheus 导出器
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl AggregationSettings {
    pub fn backoff_policy(&self) -> BackoffPolicy {
        BackoffPolicy::from_millis(self.initial_delay_ms, self.backoff_step_ms)
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载内置默认值、`config/default.toml`、`config/{APP_ENVIRONMENT}.toml`
    /// 以及 `ARTLENS__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("ARTLENS")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("aggregation.periods")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// 从指定文件加载配置，文件中未出现的项使用默认值
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name(path))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Upstream endpoints
            .set_default(
                "rijksmuseum.base_url",
                "https://www.rijksmuseum.nl/api/en/collection",
            )?
            .set_default("rijksmuseum.api_key", "")?
            .set_default("rijksmuseum.timeout_secs", 30)?
            .set_default("rijksmuseum.user_agent", "artlens/0.1")?
            .set_default("wikipedia.search_url", "https://en.wikipedia.org/w/api.php")?
            .set_default(
                "wikipedia.summary_url",
                "https://en.wikipedia.org/api/rest_v1/page/summary",
            )?
            .set_default("wikipedia.timeout_secs", 30)?
            // Aggregation defaults
            .set_default("aggregation.discovery_page_size", 100)?
            .set_default("aggregation.max_makers", 20)?
            .set_default("aggregation.top_n", 3)?
            .set_default("aggregation.initial_delay_ms", 100)?
            .set_default("aggregation.backoff_step_ms", 500)?
            .set_default("aggregation.periods", vec!["17", "18", "19"])?
            .set_default("selection.type", "painting")?
            .set_default("selection.period", "17")?
            .set_default("telemetry.json", false)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "127.0.0.1:9000")
    }
}
