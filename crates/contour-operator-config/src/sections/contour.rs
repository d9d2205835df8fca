// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Defaults applied to Contours created by the operator.

use contour_operator_api::{NetworkPublishingType, DEFAULT_SPEC_NAMESPACE};
use serde::{Deserialize, Serialize};

/// Contour defaults layer (for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContourDefaultsConfigLayer {
	pub spec_namespace: Option<String>,
	pub remove_on_deletion: Option<bool>,
	pub network_type: Option<NetworkPublishingType>,
	pub gateway_class: Option<String>,
}

impl ContourDefaultsConfigLayer {
	/// Merges another layer on top of this one.
	/// Values from `other` take precedence when present.
	pub fn merge(&mut self, other: Self) {
		if other.spec_namespace.is_some() {
			self.spec_namespace = other.spec_namespace;
		}
		if other.remove_on_deletion.is_some() {
			self.remove_on_deletion = other.remove_on_deletion;
		}
		if other.network_type.is_some() {
			self.network_type = other.network_type;
		}
		if other.gateway_class.is_some() {
			self.gateway_class = other.gateway_class;
		}
	}

	pub fn finalize(self) -> ContourDefaultsConfig {
		ContourDefaultsConfig {
			spec_namespace: self
				.spec_namespace
				.unwrap_or_else(|| DEFAULT_SPEC_NAMESPACE.to_string()),
			remove_on_deletion: self.remove_on_deletion.unwrap_or(false),
			network_type: self.network_type.unwrap_or_default(),
			gateway_class: self.gateway_class,
		}
	}
}

/// Resolved Contour defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContourDefaultsConfig {
	/// Namespace governed by new Contours.
	pub spec_namespace: String,
	pub remove_on_deletion: bool,
	pub network_type: NetworkPublishingType,
	/// GatewayClass new Contours reference, if any.
	pub gateway_class: Option<String>,
}

impl Default for ContourDefaultsConfig {
	fn default() -> Self {
		ContourDefaultsConfigLayer::default().finalize()
	}
}
