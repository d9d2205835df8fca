// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The `Contour` custom resource.
//!
//! A Contour declares one Contour/Envoy deployment and the namespace it
//! governs. Children created on its behalf carry the owning labels from
//! [`crate::labels`]; nothing on the Contour points back at them.

use std::fmt;
use std::str::FromStr;

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Namespace governed by a Contour when none is configured.
pub const DEFAULT_SPEC_NAMESPACE: &str = "projectcontour";

/// Number of Contour replicas when none is configured.
pub const DEFAULT_REPLICAS: i32 = 2;

fn default_replicas() -> i32 {
	DEFAULT_REPLICAS
}

/// Desired state of a Contour.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, PartialEq, JsonSchema)]
#[kube(
	group = "operator.projectcontour.io",
	version = "v1alpha1",
	kind = "Contour",
	plural = "contours",
	namespaced,
	status = "ContourStatus",
	derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct ContourSpec {
	/// Desired number of Contour replicas.
	#[serde(default = "default_replicas")]
	pub replicas: i32,
	/// Namespace governed by this Contour.
	#[serde(default)]
	pub namespace: NamespaceSpec,
	/// How Envoy is exposed outside the cluster.
	#[serde(default)]
	pub network_publishing: NetworkPublishing,
	/// Name of the GatewayClass this Contour is bound to, if any.
	///
	/// `None` and `Some("")` are distinct: only the former means "unset".
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gateway_class_ref: Option<String>,
}

impl Default for ContourSpec {
	fn default() -> Self {
		Self {
			replicas: DEFAULT_REPLICAS,
			namespace: NamespaceSpec::default(),
			network_publishing: NetworkPublishing::default(),
			gateway_class_ref: None,
		}
	}
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceSpec {
	pub name: String,
	/// Delete the governed namespace when the Contour is deleted.
	#[serde(default)]
	pub remove_on_deletion: bool,
}

impl Default for NamespaceSpec {
	fn default() -> Self {
		Self {
			name: DEFAULT_SPEC_NAMESPACE.to_string(),
			remove_on_deletion: false,
		}
	}
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPublishing {
	#[serde(default)]
	pub envoy: EnvoyNetworkPublishing,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvoyNetworkPublishing {
	#[serde(rename = "type", default)]
	pub type_: NetworkPublishingType,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub container_ports: Vec<ContainerPort>,
}

/// Kind of Service used to publish Envoy.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, JsonSchema)]
pub enum NetworkPublishingType {
	#[default]
	LoadBalancerService,
	NodePortService,
	ClusterIPService,
}

impl NetworkPublishingType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::LoadBalancerService => "LoadBalancerService",
			Self::NodePortService => "NodePortService",
			Self::ClusterIPService => "ClusterIPService",
		}
	}
}

impl fmt::Display for NetworkPublishingType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing an unknown network publishing type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNetworkPublishingType(pub String);

impl fmt::Display for UnknownNetworkPublishingType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown network publishing type '{}'", self.0)
	}
}

impl std::error::Error for UnknownNetworkPublishingType {}

impl FromStr for NetworkPublishingType {
	type Err = UnknownNetworkPublishingType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"LoadBalancerService" => Ok(Self::LoadBalancerService),
			"NodePortService" => Ok(Self::NodePortService),
			"ClusterIPService" => Ok(Self::ClusterIPService),
			other => Err(UnknownNetworkPublishingType(other.to_string())),
		}
	}
}

/// A named Envoy container port.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
	pub name: String,
	pub port_number: i32,
}

impl ContainerPort {
	pub fn new(name: impl Into<String>, port_number: i32) -> Self {
		Self {
			name: name.into(),
			port_number,
		}
	}
}

/// Observed state of a Contour.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContourStatus {
	#[serde(default)]
	pub available_contours: i32,
	#[serde(default)]
	pub available_envoys: i32,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub conditions: Vec<Condition>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
	#[serde(rename = "type")]
	pub type_: String,
	pub status: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reason: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}
