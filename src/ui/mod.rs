// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the camval application.

pub mod badge;
pub mod nav;
pub mod panels;
pub mod project_card;
pub mod skeleton;
pub mod stat_card;
