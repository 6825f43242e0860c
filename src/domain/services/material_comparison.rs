// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

use crate::domain::models::selection::Century;
use crate::domain::models::statistics::MaterialComparison;
use crate::domain::source::{ArtworkSource, CollectionQuery};

pub const DEFAULT_MATERIALS: [&str; 3] = ["chalk", "ink", "pencil"];

/// 比较视图使用的世纪
pub fn default_comparison_centuries() -> Vec<Century> {
    [18, 19, 20, 21]
        .into_iter()
        .filter_map(|n| Century::new(n).ok())
        .collect()
}

/// 材质 × 世纪 的作品数对比
pub struct MaterialComparisonService<S: ?Sized> {
    source: Arc<S>,
}

impl<S> MaterialComparisonService<S>
where
    S: ArtworkSource + ?Sized,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// 逐个材质、逐个世纪读取作品总数
    ///
    /// 失败的单元格只记日志，不写入该行。
    pub async fn compare(
        &self,
        materials: &[&str],
        centuries: &[Century],
    ) -> Vec<MaterialComparison> {
        let mut rows = Vec::with_capacity(materials.len());

        for &material in materials {
            let mut counts = BTreeMap::new();
            for &century in centuries {
                let query = CollectionQuery::new()
                    .material(material)
                    .dating_period(century)
                    .page_size(1);

                match self.source.search(&query).await {
                    Ok(page) => {
                        counts.insert(century.label(), page.count);
                    }
                    Err(e) => warn!(
                        "Count for material {} in {} unavailable: {}",
                        material,
                        century.label(),
                        e
                    ),
                }
            }
            rows.push(MaterialComparison {
                material: material.to_string(),
                counts,
            });
        }

        rows
    }
}
