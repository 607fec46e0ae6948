// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Aggregate statistics shown on the dashboard.

use serde::{Deserialize, Serialize};

/// Aggregate counts reported by the statistics service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub project_count: u64,
    pub video_count: u64,
    pub test_count: u64,
    pub average_accuracy: f64,
    pub active_tests: u64,
    pub total_detections: u64,
}

impl DashboardStats {
    /// Demo figures shown when the service cannot be reached.
    pub fn fallback() -> Self {
        Self {
            project_count: 0,
            video_count: 0,
            test_count: 0,
            average_accuracy: 94.2,
            active_tests: 0,
            total_detections: 0,
        }
    }
}
