// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Validation project records.
//!
//! This module defines the project record shown on the project list,
//! along with the status and camera enumerations it carries.

use serde::{Deserialize, Serialize};

/// Mounting position of the camera under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraView {
    FrontFacing,
    RearFacing,
    InCab,
}

impl CameraView {
    pub fn label(self) -> &'static str {
        match self {
            CameraView::FrontFacing => "Front-facing",
            CameraView::RearFacing => "Rear-facing",
            CameraView::InCab => "In-cab",
        }
    }
}

/// Lifecycle status of a validation project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Draft,
    /// Any status value this build does not recognise.
    #[serde(other)]
    Unknown,
}

/// Visual emphasis used when presenting a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Success,
    Info,
    Warning,
    Neutral,
}

impl ProjectStatus {
    pub fn emphasis(self) -> Emphasis {
        match self {
            ProjectStatus::Active => Emphasis::Success,
            ProjectStatus::Completed => Emphasis::Info,
            ProjectStatus::Draft => Emphasis::Warning,
            ProjectStatus::Unknown => Emphasis::Neutral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Draft => "draft",
            ProjectStatus::Unknown => "unknown",
        }
    }
}

/// A camera validation project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub camera_model: String,
    pub camera_view: CameraView,
    pub signal_type: String,
    pub created_at: String,
    pub status: ProjectStatus,
    pub tests_count: u32,
    /// Detection accuracy in percent. Zero means not yet measured.
    pub accuracy: f64,
}

impl ProjectRecord {
    /// Accuracy formatted for display, or `None` while unmeasured.
    pub fn accuracy_label(&self) -> Option<String> {
        if self.accuracy > 0.0 {
            Some(format!("{:.1}%", self.accuracy))
        } else {
            None
        }
    }
}

/// The fixed project collection shown until a project backend is wired in.
pub fn sample_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: "1".to_string(),
            name: "Urban VRU Detection".to_string(),
            description: "Pedestrian and cyclist detection in dense city traffic".to_string(),
            camera_model: "Mobileye 8 Connect".to_string(),
            camera_view: CameraView::FrontFacing,
            signal_type: "GPIO".to_string(),
            created_at: "2024-01-15".to_string(),
            status: ProjectStatus::Active,
            tests_count: 24,
            accuracy: 94.2,
        },
        ProjectRecord {
            id: "2".to_string(),
            name: "Highway Blind Spot".to_string(),
            description: "Rear camera validation for lane change warnings".to_string(),
            camera_model: "Bosch MPC3".to_string(),
            camera_view: CameraView::RearFacing,
            signal_type: "Network Packet".to_string(),
            created_at: "2024-01-10".to_string(),
            status: ProjectStatus::Completed,
            tests_count: 18,
            accuracy: 89.7,
        },
        ProjectRecord {
            id: "3".to_string(),
            name: "Driver Monitoring".to_string(),
            description: "In-cab drowsiness and distraction alerts".to_string(),
            camera_model: "Seeing Machines DMS".to_string(),
            camera_view: CameraView::InCab,
            signal_type: "Serial".to_string(),
            created_at: "2024-01-08".to_string(),
            status: ProjectStatus::Active,
            tests_count: 12,
            accuracy: 91.5,
        },
        ProjectRecord {
            id: "4".to_string(),
            name: "School Zone Pilot".to_string(),
            description: "Child pedestrian detection near school crossings".to_string(),
            camera_model: "Mobileye 8 Connect".to_string(),
            camera_view: CameraView::FrontFacing,
            signal_type: "GPIO".to_string(),
            created_at: "2024-01-20".to_string(),
            status: ProjectStatus::Draft,
            tests_count: 0,
            accuracy: 0.0,
        },
    ]
}
