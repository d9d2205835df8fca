// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Result type alias for K8s operations.
pub type K8sResult<T> = Result<T, K8sError>;

/// Errors that can occur during K8s operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum K8sError {
	#[error("K8s API error: {message}")]
	ApiError { message: String },

	#[error("Contour not found: {namespace}/{name}")]
	ContourNotFound { namespace: String, name: String },
}

impl K8sError {
	pub fn is_not_found(&self) -> bool {
		matches!(self, K8sError::ContourNotFound { .. })
	}
}

impl From<kube::Error> for K8sError {
	fn from(err: kube::Error) -> Self {
		K8sError::ApiError {
			message: err.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_not_found_display() {
		let err = K8sError::ContourNotFound {
			namespace: "operator".to_string(),
			name: "contour".to_string(),
		};
		assert_eq!(err.to_string(), "Contour not found: operator/contour");
		assert!(err.is_not_found());
	}

	#[test]
	fn test_api_error_is_not_not_found() {
		let err = K8sError::ApiError {
			message: "connection refused".to_string(),
		};
		assert_eq!(err.to_string(), "K8s API error: connection refused");
		assert!(!err.is_not_found());
	}
}
