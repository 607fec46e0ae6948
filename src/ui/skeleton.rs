// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Loading placeholders shaped like the dashboard layout.

const STAT_HEIGHT: f32 = 96.0;
const CARD_HEIGHT: f32 = 240.0;

/// Draw a row of stat placeholders followed by a row of card placeholders.
pub fn show(ui: &mut egui::Ui, stat_placeholders: usize, card_placeholders: usize) {
    if stat_placeholders > 0 {
        ui.columns(stat_placeholders, |columns| {
            for column in columns {
                block(column, STAT_HEIGHT);
            }
        });
    }

    ui.add_space(12.0);

    if card_placeholders > 0 {
        ui.columns(card_placeholders, |columns| {
            for column in columns {
                block(column, CARD_HEIGHT);
            }
        });
    }
}

fn block(ui: &mut egui::Ui, height: f32) {
    let size = egui::vec2(ui.available_width(), height);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    ui.painter().rect_filled(
        rect,
        egui::Rounding::same(6.0),
        ui.visuals().widgets.noninteractive.bg_fill,
    );
}
