// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod contour;
mod logging;

pub use contour::{ContourDefaultsConfig, ContourDefaultsConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
