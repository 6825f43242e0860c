// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::cmp::Ordering;

use crate::domain::models::statistics::{MakerCounts, RankedEntry};

/// 每个时期保留的作者数
pub const DEFAULT_TOP_N: usize = 3;
/// 柱状图展示的作者数
pub const DEFAULT_LEADING_LIMIT: usize = 10;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 计算每位作者的占比，不排序不截断
///
/// 作品数为0的作者不出现在结果中；总数为0时返回空列表。
pub fn shares(counts: &MakerCounts) -> Vec<RankedEntry> {
    let total = counts.total();
    if total == 0 {
        return Vec::new();
    }

    counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| RankedEntry {
            name: name.to_string(),
            count,
            percentage: round2(100.0 * count as f64 / total as f64),
        })
        .collect()
}

/// 按占比降序排列并截取前 `top_n` 位
///
/// 使用稳定排序，占比相同时保持输入顺序。
pub fn rank(counts: &MakerCounts, top_n: usize) -> Vec<RankedEntry> {
    let mut entries = shares(counts);
    entries.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
    });
    entries.truncate(top_n);
    entries
}

/// 柱状图使用的作者排序：按作品数降序，去掉0，截取前 `limit` 位
pub fn leading_makers(counts: &MakerCounts, limit: usize) -> Vec<(String, u64)> {
    let mut makers: Vec<(String, u64)> = counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(name, count)| (name.to_string(), count))
        .collect();
    makers.sort_by(|a, b| b.1.cmp(&a.1));
    makers.truncate(limit);
    makers
}
