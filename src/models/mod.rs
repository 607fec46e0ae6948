// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for validation projects and dashboard statistics.

pub mod project;
pub mod stats;
