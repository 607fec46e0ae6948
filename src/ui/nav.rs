// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Navigation bar.
//!
//! This module provides the bar for switching between the project list
//! and the dashboard.

use crate::app::Route;

/// Display the navigation bar. Returns the route the user picked, if any.
pub fn show(ui: &mut egui::Ui, current: &Route) -> Option<Route> {
    let mut selected = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label(egui::RichText::new("Camera Validation Studio").strong());

        ui.separator();

        let on_projects = matches!(current, Route::Projects | Route::ProjectDetail(_));
        if ui.selectable_label(on_projects, "📁 Projects").clicked() && *current != Route::Projects {
            selected = Some(Route::Projects);
        }

        if ui.selectable_label(*current == Route::Dashboard, "📊 Dashboard").clicked()
            && *current != Route::Dashboard
        {
            selected = Some(Route::Dashboard);
        }

        ui.separator();

        let hint = match current {
            Route::Projects => "Browse validation projects",
            Route::Dashboard => "Aggregate statistics from the validation API",
            Route::ProjectDetail(_) => "Project details",
        };

        ui.label(egui::RichText::new(hint).italics().weak());
    });

    selected
}
