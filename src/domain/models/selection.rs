// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Unknown work type: {0}")]
    UnknownWorkType(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}

/// 作品类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    #[default]
    Painting,
    Drawing,
    Sculpture,
}

impl WorkType {
    pub const ALL: [WorkType; 3] = [WorkType::Painting, WorkType::Drawing, WorkType::Sculpture];

    /// 上游 `type` 参数的取值
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Painting => "painting",
            WorkType::Drawing => "drawing",
            WorkType::Sculpture => "sculpture",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkType {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "painting" => Ok(WorkType::Painting),
            "drawing" => Ok(WorkType::Drawing),
            "sculpture" => Ok(WorkType::Sculpture),
            _ => Err(SelectionError::UnknownWorkType(s.to_string())),
        }
    }
}

/// 世纪时期，例如 `17` 表示17世纪
///
/// 上游以 `f.dating.period=17` 的形式过滤。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Century(u8);

impl Century {
    pub const SEVENTEENTH: Century = Century(17);
    pub const EIGHTEENTH: Century = Century(18);
    pub const NINETEENTH: Century = Century(19);

    /// 默认统计的三个世纪
    pub const DEFAULT_PERIODS: [Century; 3] =
        [Century::SEVENTEENTH, Century::EIGHTEENTH, Century::NINETEENTH];

    pub fn new(value: u8) -> Result<Self, SelectionError> {
        if (1..=21).contains(&value) {
            Ok(Century(value))
        } else {
            Err(SelectionError::InvalidPeriod(value.to_string()))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// 展示标签，例如 `17th Century`、`21st Century`
    pub fn label(&self) -> String {
        let n = self.0;
        let suffix = match (n % 10, n % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        format!("{}{} Century", n, suffix)
    }
}

impl Default for Century {
    fn default() -> Self {
        Century::SEVENTEENTH
    }
}

impl fmt::Display for Century {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Century {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| SelectionError::InvalidPeriod(s.to_string()))?;
        Century::new(value)
    }
}

impl TryFrom<String> for Century {
    type Error = SelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Century> for String {
    fn from(century: Century) -> Self {
        century.to_string()
    }
}

/// 当前的筛选条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub period: Century,
}

/// 局部更新，未设置的字段保持原值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionUpdate {
    #[serde(rename = "type", default)]
    pub work_type: Option<WorkType>,
    #[serde(default)]
    pub period: Option<Century>,
}

impl Selection {
    pub fn merge(self, update: SelectionUpdate) -> Self {
        Self {
            work_type: update.work_type.unwrap_or(self.work_type),
            period: update.period.unwrap_or(self.period),
        }
    }
}
