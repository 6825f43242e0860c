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

use serde_json::json;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use artlens::application::GalleryStore;
use artlens::config::settings::Settings;
use artlens::domain::models::selection::Selection;
use artlens::domain::services::biography_service::BiographyService;
use artlens::domain::services::ranking::{self, DEFAULT_LEADING_LIMIT};
use artlens::domain::source::ArtworkSource;
use artlens::infrastructure::metrics::init_metrics;
use artlens::infrastructure::rijksmuseum::RijksmuseumClient;
use artlens::infrastructure::wikipedia::WikipediaClient;
use artlens::utils::errors::GalleryError;
use artlens::utils::telemetry;

/// 主函数
///
/// 按默认筛选条件运行一次完整的聚合，并把报告以 JSON 输出到标准输出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new().map_err(GalleryError::from)?;
    settings.validate().map_err(GalleryError::from)?;

    // 2. Initialize logging and metrics
    telemetry::init_telemetry(settings.telemetry.json);
    init_metrics(&settings.metrics);
    info!("Starting artlens...");

    // 3. Build upstream clients
    let source: Arc<dyn ArtworkSource> =
        Arc::new(RijksmuseumClient::new(&settings.rijksmuseum).map_err(GalleryError::from)?);
    let wikipedia = Arc::new(
        WikipediaClient::new(&settings.wikipedia, &settings.rijksmuseum.user_agent)
            .map_err(GalleryError::from)?,
    );

    // 4. Run the aggregation flows
    let selection = Selection {
        work_type: settings.selection.work_type,
        period: settings.selection.period,
    };
    let mut store = GalleryStore::new(source, &settings.aggregation, selection);

    let counts = store.fetch_data().await.clone();
    let leading = ranking::leading_makers(&counts, DEFAULT_LEADING_LIMIT);
    let top = ranking::rank(&counts, settings.aggregation.top_n);

    let century_data = store.fetch_century_data(selection.work_type).await.clone();
    let biographies = BiographyService::new(wikipedia)
        .biographies(&century_data)
        .await;

    let report = json!({
        "selection": selection,
        "counts": counts,
        "leading": leading,
        "top": top,
        "centuries": century_data,
        "biographies": biographies,
        "error": store.state().last_error,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!("Report complete");
    Ok(())
}
