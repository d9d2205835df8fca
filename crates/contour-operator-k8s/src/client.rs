// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use contour_operator_api::Contour;

use crate::error::K8sError;

/// Trait for the Contour store operations the operator consumes.
///
/// This abstraction allows for easy mocking in tests. Cancellation is the
/// caller's: dropping the returned future abandons the request.
#[async_trait]
pub trait ContourStore: Send + Sync {
	/// Get a Contour by namespace and name.
	///
	/// Returns [`K8sError::ContourNotFound`] when no such Contour exists.
	async fn get_contour(&self, namespace: &str, name: &str) -> Result<Contour, K8sError>;

	/// List Contours in all namespaces.
	async fn list_contours(&self) -> Result<Vec<Contour>, K8sError>;
}
