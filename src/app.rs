// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the application shell that implements the
//! egui::App trait. It owns both pages, tracks the current route, and
//! mounts or unmounts the dashboard as the user navigates.

use crate::api::StatsSource;
use crate::config::AppConfig;
use crate::io::serialization;
use crate::models::project::{sample_projects, ProjectRecord};
use crate::pages::{dashboard::DashboardPage, projects::ProjectListPage, Navigation};
use crate::ui::nav;
use std::path::PathBuf;
use std::sync::Arc;

/// Page currently shown in the central panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Projects,
    Dashboard,
    ProjectDetail(String),
}

impl From<Navigation> for Route {
    fn from(navigation: Navigation) -> Self {
        match navigation {
            Navigation::ProjectDetail(id) => Route::ProjectDetail(id),
        }
    }
}

/// Load the initial project collection, falling back to the samples.
pub fn load_projects(config: &AppConfig) -> Vec<ProjectRecord> {
    let Some(path) = &config.projects_file else {
        return sample_projects();
    };

    match serialization::import_projects(path) {
        Ok(projects) => {
            log::info!("Loaded {} projects from {}", projects.len(), path.display());
            projects
        }
        Err(e) => {
            log::error!("{:#}; using built-in sample projects", e);
            sample_projects()
        }
    }
}

/// Main application state.
pub struct CamvalApp {
    /// Page shown in the central panel
    route: Route,

    projects: ProjectListPage,

    dashboard: DashboardPage,

    /// Data source handed to the dashboard on every mount
    stats_source: Arc<dyn StatsSource>,

    /// Whether the About window is open
    show_about: bool,
}

impl CamvalApp {
    /// Create a new application instance.
    pub fn new(projects: Vec<ProjectRecord>, stats_source: Arc<dyn StatsSource>) -> Self {
        Self {
            route: Route::Projects,
            projects: ProjectListPage::new(projects),
            dashboard: DashboardPage::new(),
            stats_source,
            show_about: false,
        }
    }

    #[cfg(test)]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Switch pages. Leaving the dashboard unmounts it; entering mounts it.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        if self.route == Route::Dashboard {
            self.dashboard.unmount();
        }
        if route == Route::Dashboard {
            self.dashboard.mount(Arc::clone(&self.stats_source));
        }
        log::info!("Navigating to {:?}", route);
        self.route = route;
    }

    /// Export the project list to a file.
    fn export_projects(&self, path: PathBuf) {
        match serialization::export_projects(self.projects.projects(), &path) {
            Ok(()) => log::info!("Exported projects to {}", path.display()),
            Err(e) => log::error!("{:#}", e),
        }
    }

    /// Placeholder destination for a project's detail view.
    /// Returns true when the user asked to go back.
    fn show_project_detail(&self, ui: &mut egui::Ui, id: &str) -> bool {
        let back = ui.button("⬅ Back to projects").clicked();
        ui.add_space(8.0);

        match self.projects.find(id) {
            Some(project) => {
                ui.heading(&project.name);
                ui.label(egui::RichText::new(format!("Project {}", project.id)).weak());
                ui.add_space(8.0);
                ui.label("Test runs and per-video results are served by the validation API.");
                ui.label(
                    egui::RichText::new("This view does not display them yet.")
                        .italics()
                        .weak(),
                );
            }
            None => {
                ui.heading("Project not found");
                ui.label(format!("No project with id '{}'", id));
            }
        }

        back
    }
}

impl eframe::App for CamvalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pick up a finished statistics fetch
        self.dashboard.poll();

        // Keep repainting while loading so the result is noticed
        if self.dashboard.is_loading() {
            ctx.request_repaint();
        }

        let mut next_route = None;

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.menu_button("Export Projects", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("projects.yaml")
                                .save_file()
                            {
                                self.export_projects(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("projects.json")
                                .save_file()
                            {
                                self.export_projects(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.button("Projects").clicked() {
                        next_route = Some(Route::Projects);
                        ui.close_menu();
                    }
                    if ui.button("Dashboard").clicked() {
                        next_route = Some(Route::Dashboard);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Navigation bar
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            if let Some(route) = nav::show(ui, &self.route) {
                next_route = Some(route);
            }
        });

        egui::Window::new("About")
            .collapsible(false)
            .resizable(false)
            .open(&mut self.show_about)
            .show(ctx, |ui| {
                ui.heading("Camera Validation Studio");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.label("Project overview and validation dashboard for video-analytics cameras.");
            });

        // Current page (center)
        egui::CentralPanel::default().show(ctx, |ui| match self.route.clone() {
            Route::Projects => {
                if let Some(navigation) = self.projects.show(ui) {
                    next_route = Some(navigation.into());
                }
            }
            Route::Dashboard => {
                egui::ScrollArea::vertical().show(ui, |ui| self.dashboard.show(ui));
            }
            Route::ProjectDetail(id) => {
                if self.show_project_detail(ui, &id) {
                    next_route = Some(Route::Projects);
                }
            }
        });

        if let Some(route) = next_route {
            self.navigate(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stats::DashboardStats;
    use crate::pages::dashboard::DashboardState;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
    }

    impl StatsSource for CountingSource {
        fn fetch_dashboard_statistics(&self) -> anyhow::Result<DashboardStats> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(DashboardStats {
                project_count: 4,
                video_count: 20,
                test_count: 54,
                average_accuracy: 91.8,
                active_tests: 1,
                total_detections: 1200,
            })
        }
    }

    fn settle(app: &mut CamvalApp) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.dashboard.is_loading() && Instant::now() < deadline {
            app.dashboard.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_dashboard_mounts_once_per_visit() {
        let source = Arc::new(CountingSource::default());
        let mut app = CamvalApp::new(sample_projects(), source.clone());
        assert_eq!(app.route(), &Route::Projects);
        assert!(!app.dashboard.is_mounted());

        app.navigate(Route::Dashboard);
        app.navigate(Route::Dashboard);
        settle(&mut app);
        assert!(matches!(app.dashboard.state(), DashboardState::Success(_)));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        app.navigate(Route::Projects);
        assert!(!app.dashboard.is_mounted());
        assert_eq!(app.dashboard.state(), &DashboardState::Idle);

        app.navigate(Route::Dashboard);
        settle(&mut app);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_project_navigation_maps_to_detail_route() {
        let source = Arc::new(CountingSource::default());
        let mut app = CamvalApp::new(sample_projects(), source.clone());

        let navigation = Navigation::ProjectDetail("3".to_string());
        app.navigate(navigation.into());
        assert_eq!(app.route(), &Route::ProjectDetail("3".to_string()));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_load_projects_prefers_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        let mut seed = sample_projects();
        seed.truncate(2);
        serialization::export_json(&seed, &path).unwrap();

        let config = AppConfig {
            projects_file: Some(path),
            ..AppConfig::default()
        };
        assert_eq!(load_projects(&config), seed);
    }

    #[test]
    fn test_load_projects_falls_back_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            projects_file: Some(dir.path().join("missing.yaml")),
            ..AppConfig::default()
        };
        assert_eq!(load_projects(&config), sample_projects());
        assert_eq!(load_projects(&AppConfig::default()), sample_projects());
    }
}
