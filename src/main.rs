// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Camval - Camera Validation Studio
//!
//! A cross-platform desktop front end for a video-analytics camera
//! validation service: browse validation projects and view aggregate
//! test statistics fetched from the validation API.

mod api;
mod app;
mod config;
mod io;
mod models;
mod pages;
mod ui;

use anyhow::Result;
use api::{HttpStatsSource, StatsSource};
use app::CamvalApp;
use config::AppConfig;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load()?;
    let http_source = HttpStatsSource::new(&config);
    log::info!("Fetching dashboard statistics from {}", http_source.url());

    let projects = app::load_projects(&config);
    let stats_source: Arc<dyn StatsSource> = Arc::new(http_source);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Camval - Camera Validation Studio"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "camval",
        options,
        Box::new(move |_cc| Ok(Box::new(CamvalApp::new(projects, stats_source)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
