// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dashboard content panels and the fallback warning banner.

use super::badge;
use crate::models::project::Emphasis;
use crate::pages::dashboard::{RecentSession, SystemStatus};

/// Draw the warning banner. Returns true when the user dismissed it.
pub fn warning_banner(ui: &mut egui::Ui, message: &str) -> bool {
    let color = badge::emphasis_color(Emphasis::Warning);
    let mut dismissed = false;

    egui::Frame::none()
        .fill(color.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").color(color));
                ui.label(message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                        dismissed = true;
                    }
                });
            });
        });

    dismissed
}

/// Fixed list of recent test sessions.
pub fn recent_sessions(ui: &mut egui::Ui, sessions: &[RecentSession]) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("Recent Test Sessions").strong());
            ui.add_space(6.0);

            for session in sessions {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(session.title);
                        ui.label(
                            egui::RichText::new(format!("{} · {}", session.detail, session.when))
                                .small()
                                .weak(),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        badge::show(ui, session.status.label(), session.status.emphasis());
                    });
                });
                ui.separator();
            }
        });
}

/// Fixed system health bars.
pub fn system_status(ui: &mut egui::Ui, statuses: &[SystemStatus]) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new("System Status").strong());
            ui.add_space(6.0);

            for status in statuses {
                ui.horizontal(|ui| {
                    ui.label(status.label);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(format!("{}%", status.percent)).weak());
                    });
                });
                ui.add(
                    egui::ProgressBar::new(f32::from(status.percent) / 100.0)
                        .fill(badge::emphasis_color(status.emphasis)),
                );
                ui.add_space(6.0);
            }
        });
}
