// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project list page.
//!
//! Renders the project collection as cards with a per-card action menu
//! and a "New Project" dialog. Create, edit and delete are not connected
//! to a project backend yet: they close their dialog or menu and leave
//! the collection untouched.

use super::Navigation;
use crate::models::project::{CameraView, Emphasis, ProjectRecord};
use crate::ui::project_card;

/// User interaction on the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectAction {
    ToggleMenu(String),
    CloseMenu,
    Edit(String),
    Delete(String),
    OpenCreateDialog,
    CancelCreate,
    SubmitCreate,
    ViewDetails(String),
}

/// Everything a project card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub camera: String,
    pub signal_type: String,
    pub created_at: String,
    pub status_label: &'static str,
    pub emphasis: Emphasis,
    pub tests_count: u32,
    pub accuracy_label: Option<String>,
}

impl From<&ProjectRecord> for ProjectCard {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            camera: format!("{} ({})", record.camera_model, record.camera_view.label()),
            signal_type: record.signal_type.clone(),
            created_at: record.created_at.clone(),
            status_label: record.status.label(),
            emphasis: record.status.emphasis(),
            tests_count: record.tests_count,
            accuracy_label: record.accuracy_label(),
        }
    }
}

/// Form contents of the "New Project" dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub camera_model: String,
    pub camera_view: CameraView,
    pub signal_type: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            camera_model: String::new(),
            camera_view: CameraView::FrontFacing,
            signal_type: String::new(),
        }
    }
}

/// Project list page state.
pub struct ProjectListPage {
    projects: Vec<ProjectRecord>,
    /// Id of the card whose action menu is open
    open_menu: Option<String>,
    create_dialog_open: bool,
    draft: ProjectDraft,
}

impl ProjectListPage {
    pub fn new(projects: Vec<ProjectRecord>) -> Self {
        Self {
            projects,
            open_menu: None,
            create_dialog_open: false,
            draft: ProjectDraft::default(),
        }
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn find(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    #[cfg(test)]
    pub fn open_menu(&self) -> Option<&str> {
        self.open_menu.as_deref()
    }

    #[cfg(test)]
    pub fn is_create_dialog_open(&self) -> bool {
        self.create_dialog_open
    }

    #[cfg(test)]
    pub fn draft_mut(&mut self) -> &mut ProjectDraft {
        &mut self.draft
    }

    pub fn cards(&self) -> Vec<ProjectCard> {
        self.projects.iter().map(ProjectCard::from).collect()
    }

    /// Apply an interaction. Returns a navigation request when one results.
    pub fn apply(&mut self, action: ProjectAction) -> Option<Navigation> {
        match action {
            ProjectAction::ToggleMenu(id) => {
                self.open_menu = if self.open_menu.as_deref() == Some(id.as_str()) {
                    None
                } else {
                    Some(id)
                };
            }
            ProjectAction::CloseMenu => {
                self.open_menu = None;
            }
            ProjectAction::Edit(id) => {
                self.open_menu = None;
                log::info!("Edit requested for project {}, editing is not available yet", id);
            }
            ProjectAction::Delete(id) => {
                self.open_menu = None;
                log::info!("Delete requested for project {}, deletion is not available yet", id);
            }
            ProjectAction::OpenCreateDialog => {
                self.open_menu = None;
                self.create_dialog_open = true;
            }
            ProjectAction::CancelCreate => {
                self.create_dialog_open = false;
                self.draft = ProjectDraft::default();
            }
            ProjectAction::SubmitCreate => {
                log::info!(
                    "Create requested for project '{}', creation is not available yet",
                    self.draft.name
                );
                self.create_dialog_open = false;
                self.draft = ProjectDraft::default();
            }
            ProjectAction::ViewDetails(id) => {
                self.open_menu = None;
                log::info!("Opening details for project {}", id);
                return Some(Navigation::ProjectDetail(id));
            }
        }
        None
    }

    /// Draw the page and handle its interactions.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<Navigation> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.heading("Projects");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ New Project").clicked() {
                    action = Some(ProjectAction::OpenCreateDialog);
                }
            });
        });
        ui.label(egui::RichText::new("Manage your camera validation projects").weak());
        ui.add_space(12.0);

        // Escape closes an open card menu
        if self.open_menu.is_some() && ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            action = Some(ProjectAction::CloseMenu);
        }

        let cards = self.cards();
        let open_menu = self.open_menu.clone();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for row in cards.chunks(2) {
                ui.columns(2, |columns| {
                    for (column, card) in columns.iter_mut().zip(row) {
                        let menu_open = open_menu.as_deref() == Some(card.id.as_str());
                        if let Some(card_action) = project_card::show(column, card, menu_open) {
                            action = Some(card_action);
                        }
                    }
                });
                ui.add_space(8.0);
            }
        });

        if self.create_dialog_open {
            if let Some(dialog_action) = self.show_create_dialog(ui.ctx()) {
                action = Some(dialog_action);
            }
        }

        action.and_then(|a| self.apply(a))
    }

    fn show_create_dialog(&mut self, ctx: &egui::Context) -> Option<ProjectAction> {
        let mut action = None;
        let mut open = true;

        egui::Window::new("New Project")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                let draft = &mut self.draft;
                egui::Grid::new("new_project_form")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Name");
                        ui.text_edit_singleline(&mut draft.name);
                        ui.end_row();

                        ui.label("Description");
                        ui.text_edit_multiline(&mut draft.description);
                        ui.end_row();

                        ui.label("Camera model");
                        ui.text_edit_singleline(&mut draft.camera_model);
                        ui.end_row();

                        ui.label("Camera view");
                        egui::ComboBox::from_id_source("new_project_camera_view")
                            .selected_text(draft.camera_view.label())
                            .show_ui(ui, |ui| {
                                for view in [CameraView::FrontFacing, CameraView::RearFacing, CameraView::InCab] {
                                    ui.selectable_value(&mut draft.camera_view, view, view.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Signal type");
                        ui.text_edit_singleline(&mut draft.signal_type);
                        ui.end_row();
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        action = Some(ProjectAction::CancelCreate);
                    }
                    if ui.button("Create Project").clicked() {
                        action = Some(ProjectAction::SubmitCreate);
                    }
                });
            });

        if !open {
            action = Some(ProjectAction::CancelCreate);
        }
        action
    }
}
