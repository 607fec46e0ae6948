// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project card with its action menu.

use super::badge;
use crate::pages::projects::{ProjectAction, ProjectCard};

/// Draw one project card. Returns the action the user triggered, if any.
pub fn show(ui: &mut egui::Ui, card: &ProjectCard, menu_open: bool) -> Option<ProjectAction> {
    let mut action = None;

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&card.name).strong().size(16.0));
                badge::show(ui, card.status_label, card.emphasis);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.selectable_label(menu_open, "⋮").clicked() {
                        action = Some(ProjectAction::ToggleMenu(card.id.clone()));
                    }
                });
            });

            if menu_open {
                ui.horizontal(|ui| {
                    if ui.button("✏ Edit").clicked() {
                        action = Some(ProjectAction::Edit(card.id.clone()));
                    }
                    if ui.button("🗑 Delete").clicked() {
                        action = Some(ProjectAction::Delete(card.id.clone()));
                    }
                });
            }

            ui.label(egui::RichText::new(&card.description).weak());
            ui.add_space(6.0);

            egui::Grid::new(("project_card", card.id.as_str()))
                .num_columns(2)
                .spacing([12.0, 2.0])
                .show(ui, |ui| {
                    ui.label("Camera");
                    ui.label(&card.camera);
                    ui.end_row();
                    ui.label("Signal");
                    ui.label(&card.signal_type);
                    ui.end_row();
                    ui.label("Created");
                    ui.label(&card.created_at);
                    ui.end_row();
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(format!("{} tests", card.tests_count));
                if let Some(accuracy) = &card.accuracy_label {
                    ui.separator();
                    ui.label(egui::RichText::new(format!("{} accuracy", accuracy)).strong());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("View Details").clicked() {
                        action = Some(ProjectAction::ViewDetails(card.id.clone()));
                    }
                });
            });
        });

    action
}
