// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stat card: one named metric with an icon and optional trend.

use super::badge::emphasis_color;
use crate::models::project::Emphasis;
use crate::pages::dashboard::StatCard;

pub fn show(ui: &mut egui::Ui, card: &StatCard) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(card.icon).size(18.0));
                ui.label(egui::RichText::new(card.title).weak());
            });
            ui.label(egui::RichText::new(&card.value).size(28.0).strong());
            if let Some(trend) = card.trend {
                ui.label(
                    egui::RichText::new(format!("⬆ {} from last month", trend))
                        .small()
                        .color(emphasis_color(Emphasis::Success)),
                );
            }
        });
}
