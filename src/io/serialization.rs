// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project list serialization and deserialization.
//!
//! This module handles exporting and importing project records in YAML
//! and JSON formats. The format is chosen from the file extension.

use crate::models::project::ProjectRecord;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Export projects to YAML format.
pub fn export_yaml(projects: &[ProjectRecord], path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(projects)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export projects to JSON format.
pub fn export_json(projects: &[ProjectRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(projects)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Import projects from YAML format.
pub fn import_yaml(path: &Path) -> Result<Vec<ProjectRecord>> {
    let yaml = std::fs::read_to_string(path)?;
    let projects = serde_yaml::from_str(&yaml)?;
    Ok(projects)
}

/// Import projects from JSON format.
pub fn import_json(path: &Path) -> Result<Vec<ProjectRecord>> {
    let json = std::fs::read_to_string(path)?;
    let projects = serde_json::from_str(&json)?;
    Ok(projects)
}

/// Export projects, picking the format from the extension.
pub fn export_projects(projects: &[ProjectRecord], path: &Path) -> Result<()> {
    let result = match extension(path).as_deref() {
        Some("yaml") | Some("yml") => export_yaml(projects, path),
        Some("json") => export_json(projects, path),
        other => bail!("Unsupported file extension: {:?}", other),
    };
    result.with_context(|| format!("Failed to export projects to {}", path.display()))
}

/// Import projects, picking the format from the extension.
///
/// Ids must be unique within the imported set.
pub fn import_projects(path: &Path) -> Result<Vec<ProjectRecord>> {
    let projects = match extension(path).as_deref() {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        other => bail!("Unsupported file extension: {:?}", other),
    }
    .with_context(|| format!("Failed to import projects from {}", path.display()))?;

    let mut seen = std::collections::HashSet::new();
    for project in &projects {
        if !seen.insert(project.id.as_str()) {
            bail!("Duplicate project id '{}' in {}", project.id, path.display());
        }
    }
    Ok(projects)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
}
