// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::Deserialize;

use crate::sections::{ContourDefaultsConfigLayer, LoggingConfigLayer};

/// Operator configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperatorConfigLayer {
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
	#[serde(default)]
	pub contour: Option<ContourDefaultsConfigLayer>,
}

impl OperatorConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: OperatorConfigLayer) {
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
		merge_option(
			&mut self.contour,
			other.contour,
			ContourDefaultsConfigLayer::merge,
		);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_empty_layers() {
		let mut base = OperatorConfigLayer::default();
		base.merge(OperatorConfigLayer::default());
		assert!(base.logging.is_none());
		assert!(base.contour.is_none());
	}

	#[test]
	fn test_merge_adds_missing_sections() {
		let mut base = OperatorConfigLayer {
			logging: Some(LoggingConfigLayer {
				level: Some("debug".to_string()),
			}),
			..Default::default()
		};
		let other = OperatorConfigLayer {
			contour: Some(ContourDefaultsConfigLayer {
				spec_namespace: Some("teamA".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(other);
		assert_eq!(
			base.logging.as_ref().unwrap().level,
			Some("debug".to_string())
		);
		assert_eq!(
			base.contour.as_ref().unwrap().spec_namespace,
			Some("teamA".to_string())
		);
	}

	#[test]
	fn test_merge_other_overwrites() {
		let mut base = OperatorConfigLayer {
			contour: Some(ContourDefaultsConfigLayer {
				spec_namespace: Some("teamA".to_string()),
				remove_on_deletion: Some(true),
				..Default::default()
			}),
			..Default::default()
		};
		let other = OperatorConfigLayer {
			contour: Some(ContourDefaultsConfigLayer {
				spec_namespace: Some("teamB".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(other);
		let contour = base.contour.unwrap();
		assert_eq!(contour.spec_namespace, Some("teamB".to_string()));
		assert_eq!(contour.remove_on_deletion, Some(true));
	}
}
