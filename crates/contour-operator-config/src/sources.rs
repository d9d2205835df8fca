// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use contour_operator_api::NetworkPublishingType;
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::OperatorConfigLayer;
use crate::sections::{ContourDefaultsConfigLayer, LoggingConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<OperatorConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<OperatorConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(OperatorConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/contour-operator/operator.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<OperatorConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(OperatorConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: OperatorConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: CONTOUR_OPERATOR_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<OperatorConfigLayer, ConfigError> {
		debug!("loading environment variables");
		load_from_lookup(|name| std::env::var(name).ok())
	}
}

/// Build a layer from an environment-like lookup. Empty values count as unset.
pub(crate) fn load_from_lookup<F>(lookup: F) -> Result<OperatorConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let var = |name: &str| lookup(name).filter(|s| !s.is_empty());

	let network_type = match var("CONTOUR_OPERATOR_NETWORK_TYPE") {
		Some(v) => Some(v.parse::<NetworkPublishingType>().map_err(|e| {
			ConfigError::InvalidValue {
				key: "CONTOUR_OPERATOR_NETWORK_TYPE".to_string(),
				message: e.to_string(),
			}
		})?),
		None => None,
	};

	let remove_on_deletion = match var("CONTOUR_OPERATOR_REMOVE_NAMESPACE_ON_DELETION") {
		Some(v) => Some(parse_bool("CONTOUR_OPERATOR_REMOVE_NAMESPACE_ON_DELETION", &v)?),
		None => None,
	};

	Ok(OperatorConfigLayer {
		logging: Some(LoggingConfigLayer {
			level: var("CONTOUR_OPERATOR_LOG_LEVEL"),
		}),
		contour: Some(ContourDefaultsConfigLayer {
			spec_namespace: var("CONTOUR_OPERATOR_SPEC_NAMESPACE"),
			remove_on_deletion,
			network_type,
			gateway_class: var("CONTOUR_OPERATOR_GATEWAY_CLASS"),
		}),
	})
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
	match value.to_ascii_lowercase().as_str() {
		"true" | "1" => Ok(true),
		"false" | "0" => Ok(false),
		_ => Err(ConfigError::InvalidValue {
			key: key.to_string(),
			message: format!("invalid bool value '{value}'"),
		}),
	}
}
