// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Global tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ConfigError;
use crate::sections::LoggingConfig;

/// Build the filter: `RUST_LOG` when set, otherwise `logging.level`.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install the global tracing subscriber.
///
/// Fails instead of panicking if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
	tracing_subscriber::registry()
		.with(env_filter(config))
		.with(tracing_subscriber::fmt::layer())
		.try_init()
		.map_err(|e| ConfigError::Tracing(e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_second_init_is_an_error() {
		let config = LoggingConfig::default();
		let _ = init_tracing(&config);
		let err = init_tracing(&config).unwrap_err();
		assert!(matches!(err, ConfigError::Tracing(_)));
	}
}
