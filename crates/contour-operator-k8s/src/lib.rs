// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! K8s store abstraction for Contour custom resources.
//!
//! This crate provides:
//! - A trait-based store for getting and listing Contours, for testability
//! - Production implementation using the kube crate
//! - An in-memory mock store for tests

mod client;
mod error;
mod kube_client;
mod mock;

pub use client::ContourStore;
pub use error::{K8sError, K8sResult};
pub use kube_client::KubeClient;
pub use mock::MockContourStore;
