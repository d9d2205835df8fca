// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Contour construction.

use contour_operator_api::{
	ContainerPort, Contour, ContourSpec, EnvoyNetworkPublishing, NamespaceSpec, NetworkPublishing,
	NetworkPublishingType,
};
use contour_operator_config::ContourDefaultsConfig;

/// Envoy HTTP container port name and number.
pub const ENVOY_HTTP_PORT: (&str, i32) = ("http", 8080);

/// Envoy HTTPS container port name and number.
pub const ENVOY_HTTPS_PORT: (&str, i32) = ("https", 8443);

/// Inputs for [`new_contour`].
#[derive(Debug, Clone, PartialEq)]
pub struct ContourConfig {
	pub name: String,
	pub namespace: String,
	/// Namespace governed by the Contour.
	pub spec_namespace: String,
	pub remove_namespace_on_deletion: bool,
	pub network_type: NetworkPublishingType,
	pub gateway_class: Option<String>,
}

impl ContourConfig {
	/// Config for `namespace/name` with every other field taken from the
	/// operator's Contour defaults.
	pub fn from_defaults(
		name: impl Into<String>,
		namespace: impl Into<String>,
		defaults: &ContourDefaultsConfig,
	) -> Self {
		Self {
			name: name.into(),
			namespace: namespace.into(),
			spec_namespace: defaults.spec_namespace.clone(),
			remove_namespace_on_deletion: defaults.remove_on_deletion,
			network_type: defaults.network_type,
			gateway_class: defaults.gateway_class.clone(),
		}
	}
}

/// Make a Contour for `config.namespace/config.name`.
///
/// Envoy always gets the `http`/8080 and `https`/8443 container ports. The
/// GatewayClass reference is copied only when set, so an unset reference
/// stays `None` rather than becoming an empty string. Nothing is persisted.
pub fn new_contour(config: &ContourConfig) -> Contour {
	let spec = ContourSpec {
		namespace: NamespaceSpec {
			name: config.spec_namespace.clone(),
			remove_on_deletion: config.remove_namespace_on_deletion,
		},
		network_publishing: NetworkPublishing {
			envoy: EnvoyNetworkPublishing {
				type_: config.network_type,
				container_ports: vec![
					ContainerPort::new(ENVOY_HTTP_PORT.0, ENVOY_HTTP_PORT.1),
					ContainerPort::new(ENVOY_HTTPS_PORT.0, ENVOY_HTTPS_PORT.1),
				],
			},
		},
		gateway_class_ref: config.gateway_class.clone(),
		..Default::default()
	};

	let mut contour = Contour::new(&config.name, spec);
	contour.metadata.namespace = Some(config.namespace.clone());
	contour
}
