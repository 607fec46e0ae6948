// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Access to the external validation API.
//!
//! All storage and computation live in the API service. The application
//! only reads aggregate statistics from it.

pub mod stats;

pub use stats::{HttpStatsSource, StatsSource};
