// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Status badges and emphasis colours.

use crate::models::project::Emphasis;

/// Colour used for an emphasis level.
pub fn emphasis_color(emphasis: Emphasis) -> egui::Color32 {
    match emphasis {
        Emphasis::Success => egui::Color32::from_rgb(46, 160, 67),
        Emphasis::Info => egui::Color32::from_rgb(56, 139, 253),
        Emphasis::Warning => egui::Color32::from_rgb(210, 153, 34),
        Emphasis::Neutral => egui::Color32::from_gray(140),
    }
}

/// Draw a small rounded badge with tinted text.
pub fn show(ui: &mut egui::Ui, text: &str, emphasis: Emphasis) {
    let color = emphasis_color(emphasis);
    egui::Frame::none()
        .fill(color.gamma_multiply(0.2))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(color));
        });
}
