// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use contour_operator_k8s::K8sError;
use thiserror::Error;

/// Result type alias for Contour uniqueness checks.
pub type ContourResult<T> = Result<T, ContourError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContourError {
	#[error("failed to list contours: {source}")]
	List {
		#[source]
		source: K8sError,
	},

	#[error("spec.namespace.name {namespace} is already used by {}", .conflicting.join(", "))]
	SpecNamespaceConflict {
		namespace: String,
		/// `namespace/name` of every other Contour governing the namespace.
		conflicting: Vec<String>,
	},
}
