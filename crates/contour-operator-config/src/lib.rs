// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Layered configuration for the contour operator.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Defaults applied to Contours the operator creates
//! - Tracing subscriber setup driven by the logging section
//!
//! # Usage
//!
//! ```ignore
//! use contour_operator_config::{init_tracing, load_config};
//!
//! let config = load_config()?;
//! init_tracing(&config.logging)?;
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;
mod subscriber;

pub use error::ConfigError;
pub use layer::OperatorConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};
pub use subscriber::{env_filter, init_tracing};

use tracing::{debug, info};

/// Fully resolved operator configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatorConfig {
	pub logging: LoggingConfig,
	pub contour: ContourDefaultsConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`CONTOUR_OPERATOR_*`)
/// 2. Config file (`/etc/contour-operator/operator.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<OperatorConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<OperatorConfig, ConfigError> {
	let mut merged = OperatorConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<OperatorConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<OperatorConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = OperatorConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: OperatorConfigLayer) -> Result<OperatorConfig, ConfigError> {
	let logging = layer.logging.unwrap_or_default().finalize();
	let contour = layer.contour.unwrap_or_default().finalize();

	validate_config(&contour)?;

	info!(
		log_level = %logging.level,
		spec_namespace = %contour.spec_namespace,
		network_type = %contour.network_type,
		gateway_class = ?contour.gateway_class,
		"configuration loaded"
	);

	Ok(OperatorConfig { logging, contour })
}

fn validate_config(contour: &ContourDefaultsConfig) -> Result<(), ConfigError> {
	if contour.spec_namespace.trim().is_empty() {
		return Err(ConfigError::Validation(
			"contour.spec_namespace must not be empty".to_string(),
		));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use contour_operator_api::NetworkPublishingType;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn test_finalize_empty_layer_uses_defaults() {
		let config = finalize(OperatorConfigLayer::default()).unwrap();
		assert_eq!(config, OperatorConfig::default());
	}

	#[test]
	fn test_finalize_rejects_blank_spec_namespace() {
		let layer = OperatorConfigLayer {
			contour: Some(ContourDefaultsConfigLayer {
				spec_namespace: Some("  ".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		let err = finalize(layer).unwrap_err();
		assert!(matches!(err, ConfigError::Validation(_)));
	}

	#[test]
	fn test_file_layer_overrides_defaults() {
		let mut file = NamedTempFile::new().unwrap();
		write!(
			file,
			r#"
[contour]
spec_namespace = "teamA"
network_type = "NodePortService"
"#
		)
		.unwrap();

		let sources: Vec<Box<dyn ConfigSource>> = vec![
			Box::new(TomlSource::new(file.path())),
			Box::new(DefaultsSource),
		];
		let config = load_from_sources(sources).unwrap();
		assert_eq!(config.contour.spec_namespace, "teamA");
		assert_eq!(
			config.contour.network_type,
			NetworkPublishingType::NodePortService
		);
		assert_eq!(config.logging.level, "info");
	}
}
