// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;

pub const UPSTREAM_REQUESTS_TOTAL: &str = "upstream_requests_total";
pub const UPSTREAM_FAILURES_TOTAL: &str = "upstream_failures_total";
pub const UPSTREAM_REQUEST_DURATION: &str = "upstream_request_duration_seconds";

/// 初始化指标系统
///
/// 未启用时不安装导出器，`counter!` 等宏在没有 recorder 时为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}", e);
        return;
    }

    describe_counter!(
        UPSTREAM_REQUESTS_TOTAL,
        "Total number of requests sent to upstream APIs"
    );
    describe_counter!(
        UPSTREAM_FAILURES_TOTAL,
        "Total number of failed upstream requests"
    );
    describe_histogram!(
        UPSTREAM_REQUEST_DURATION,
        "Duration of upstream requests in seconds"
    );

    info!("Metrics exporter listening on {}", addr);
}
