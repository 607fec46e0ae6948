// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dashboard statistics endpoint.
//!
//! Requests are blocking and must be issued off the UI thread.

use crate::config::AppConfig;
use crate::models::stats::DashboardStats;
use anyhow::{anyhow, Context, Result};
use std::time::Duration;

/// Anything able to produce dashboard statistics.
pub trait StatsSource: Send + Sync {
    fn fetch_dashboard_statistics(&self) -> Result<DashboardStats>;
}

/// Statistics source backed by `GET {base}/dashboard/stats`.
pub struct HttpStatsSource {
    agent: ureq::Agent,
    url: String,
}

impl HttpStatsSource {
    pub fn new(config: &AppConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(config.connect_timeout_secs))
            .timeout_read(Duration::from_secs(config.read_timeout_secs))
            .build();
        Self {
            agent,
            url: stats_url(&config.api_base_url),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl StatsSource for HttpStatsSource {
    fn fetch_dashboard_statistics(&self) -> Result<DashboardStats> {
        let response = match self.agent.get(&self.url).set("Accept", "application/json").call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => {
                return Err(anyhow!("HTTP {code} from {}", self.url))
                    .context("statistics fetch failed");
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(anyhow::Error::new(err)).context("statistics fetch failed");
            }
        };

        let body = response
            .into_string()
            .context("statistics fetch failed")?;
        parse_stats(&body)
    }
}

fn stats_url(base: &str) -> String {
    format!("{}/dashboard/stats", base.trim_end_matches('/'))
}

fn parse_stats(body: &str) -> Result<DashboardStats> {
    serde_json::from_str(body)
        .map_err(|e| anyhow!("invalid statistics payload: {e}"))
        .context("statistics fetch failed")
}
