// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::domain::models::artwork::ArtworkRecord;
use crate::domain::models::selection::Century;

/// 作者 -> 作品数 的映射
///
/// 保持插入顺序，排序时以此作为并列的次序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakerCounts {
    entries: Vec<(String, u64)>,
}

impl MakerCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入计数，已存在的作者会被覆盖但保留原位置
    pub fn insert(&mut self, maker: impl Into<String>, count: u64) {
        let maker = maker.into();
        match self.entries.iter_mut().find(|(name, _)| *name == maker) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((maker, count)),
        }
    }

    /// 累加计数
    pub fn increment(&mut self, maker: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == maker) {
            Some(entry) => entry.1 += 1,
            None => self.entries.push((maker.to_string(), 1)),
        }
    }

    pub fn get(&self, maker: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(name, _)| name == maker)
            .map(|(_, count)| *count)
    }

    pub fn contains(&self, maker: &str) -> bool {
        self.get(maker).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    pub fn makers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for MakerCounts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts = MakerCounts::new();
        for (maker, count) in iter {
            counts.insert(maker, count);
        }
        counts
    }
}

impl Serialize for MakerCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

/// 排名条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: u64,
    /// 占该时期总数的百分比，保留两位小数
    pub percentage: f64,
}

/// 按世纪分组的排名数据
///
/// 键为 `17th Century` 这样的标签，构造时即包含全部时期，
/// 并保持配置中的时期顺序（而不是标签的字母序）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenturyData {
    periods: Vec<(Century, Vec<RankedEntry>)>,
}

impl CenturyData {
    /// 以空列表初始化每个时期
    pub fn with_periods(periods: &[Century]) -> Self {
        let mut data = Self::default();
        for &century in periods {
            data.insert(century, Vec::new());
        }
        data
    }

    /// 写入某时期的排名，已有的时期原位替换
    pub fn insert(&mut self, century: Century, entries: Vec<RankedEntry>) {
        match self.periods.iter_mut().find(|(c, _)| *c == century) {
            Some((_, existing)) => *existing = entries,
            None => self.periods.push((century, entries)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&[RankedEntry]> {
        self.periods
            .iter()
            .find(|(century, _)| century.label() == label)
            .map(|(_, entries)| entries.as_slice())
    }

    pub fn centuries(&self) -> impl Iterator<Item = Century> + '_ {
        self.periods.iter().map(|(century, _)| *century)
    }

    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.centuries().map(|century| century.label())
    }

    pub fn iter(&self) -> impl Iterator<Item = (String, &[RankedEntry])> {
        self.periods
            .iter()
            .map(|(century, entries)| (century.label(), entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// 某时期入选作者的作品总数（饼图的扇区大小）
    pub fn period_total(&self, label: &str) -> u64 {
        self.get(label)
            .map(|entries| entries.iter().map(|entry| entry.count).sum())
            .unwrap_or(0)
    }
}

impl Serialize for CenturyData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.periods.len()))?;
        for (century, entries) in &self.periods {
            map.serialize_entry(&century.label(), entries)?;
        }
        map.end()
    }
}

/// 材质对比中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialComparison {
    pub material: String,
    /// 世纪标签 -> 作品数，失败的单元格不出现
    pub counts: BTreeMap<String, u64>,
}

/// 画廊条目：某位作者的代表作品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub maker: String,
    pub artwork: ArtworkRecord,
}
