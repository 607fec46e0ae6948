// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top-level pages shown in the central panel.

pub mod dashboard;
pub mod projects;

/// Navigation request raised by a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    ProjectDetail(String),
}
