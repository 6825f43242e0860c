// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

/// 线性退避策略配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// 每次请求前的初始等待时间
    pub initial_delay: Duration,
    /// 每次失败后追加的等待时间
    pub step: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(100),
            step: Duration::from_millis(500),
        }
    }
}

impl BackoffPolicy {
    /// 创建标准退避策略
    pub fn standard() -> Self {
        Self::default()
    }

    /// 不等待的策略，用于测试或本地数据源
    pub fn immediate() -> Self {
        Self {
            initial_delay: Duration::ZERO,
            step: Duration::ZERO,
        }
    }

    pub fn from_millis(initial_ms: u64, step_ms: u64) -> Self {
        Self {
            initial_delay: Duration::from_millis(initial_ms),
            step: Duration::from_millis(step_ms),
        }
    }

    /// 开始一轮新的退避计时
    pub fn start(&self) -> LinearBackoff {
        LinearBackoff {
            policy: *self,
            current: self.initial_delay,
        }
    }
}

/// 单次聚合调用内的退避状态
///
/// 失败时等待时间累加 `step`，直到下一次成功才回到 `initial_delay`。
#[derive(Debug, Clone)]
pub struct LinearBackoff {
    policy: BackoffPolicy,
    current: Duration,
}

impl LinearBackoff {
    /// 下一次请求前需要等待的时间
    pub fn delay(&self) -> Duration {
        self.current
    }

    pub fn record_success(&mut self) {
        self.current = self.policy.initial_delay;
    }

    pub fn record_failure(&mut self) {
        self.current = self.current.saturating_add(self.policy.step);
    }
}
