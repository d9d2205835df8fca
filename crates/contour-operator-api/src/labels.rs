// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Owning label contract.
//!
//! Any object carrying both labels below, with values equal to a Contour's
//! name and namespace, belongs to that Contour. Values are compared with
//! exact, case-sensitive string equality. These keys are persisted on live
//! objects and must not change.

use std::collections::BTreeMap;

use crate::contour::Contour;

/// Label holding the name of the owning Contour.
pub const OWNING_CONTOUR_NAME_LABEL: &str =
	"contour.operator.projectcontour.io/owning-contour-name";

/// Label holding the namespace of the owning Contour.
pub const OWNING_CONTOUR_NS_LABEL: &str =
	"contour.operator.projectcontour.io/owning-contour-namespace";

/// The Contour identity attested by a pair of owning labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerRef {
	pub name: String,
	pub namespace: String,
}

impl OwnerRef {
	/// Identity of `contour`. Unset name or namespace read as empty.
	pub fn of(contour: &Contour) -> Self {
		Self {
			name: contour.metadata.name.clone().unwrap_or_default(),
			namespace: contour.metadata.namespace.clone().unwrap_or_default(),
		}
	}

	/// Decode the owning labels. Returns `None` unless both are present.
	pub fn from_labels(labels: &BTreeMap<String, String>) -> Option<Self> {
		let name = labels.get(OWNING_CONTOUR_NAME_LABEL)?;
		let namespace = labels.get(OWNING_CONTOUR_NS_LABEL)?;
		Some(Self {
			name: name.clone(),
			namespace: namespace.clone(),
		})
	}

	/// Encode as an owning label map.
	pub fn to_labels(&self) -> BTreeMap<String, String> {
		let mut labels = BTreeMap::new();
		labels.insert(OWNING_CONTOUR_NAME_LABEL.to_string(), self.name.clone());
		labels.insert(OWNING_CONTOUR_NS_LABEL.to_string(), self.namespace.clone());
		labels
	}
}

/// Owning labels to stamp on children of `contour`.
pub fn owner_labels(contour: &Contour) -> BTreeMap<String, String> {
	OwnerRef::of(contour).to_labels()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::contour::ContourSpec;

	fn contour(ns: &str, name: &str) -> Contour {
		let mut c = Contour::new(name, ContourSpec::default());
		c.metadata.namespace = Some(ns.to_string());
		c
	}

	#[test]
	fn test_owner_labels_has_both_keys() {
		let labels = owner_labels(&contour("operator", "contour-a"));
		assert_eq!(labels.len(), 2);
		assert_eq!(
			labels.get(OWNING_CONTOUR_NAME_LABEL),
			Some(&"contour-a".to_string())
		);
		assert_eq!(
			labels.get(OWNING_CONTOUR_NS_LABEL),
			Some(&"operator".to_string())
		);
	}

	#[test]
	fn test_owner_labels_without_namespace_encodes_empty() {
		let c = Contour::new("contour-a", ContourSpec::default());
		let labels = owner_labels(&c);
		assert_eq!(labels.get(OWNING_CONTOUR_NS_LABEL), Some(&String::new()));
	}

	#[test]
	fn test_from_labels_requires_both_keys() {
		let mut labels = BTreeMap::new();
		labels.insert(OWNING_CONTOUR_NAME_LABEL.to_string(), "a".to_string());
		assert_eq!(OwnerRef::from_labels(&labels), None);

		labels.insert(OWNING_CONTOUR_NS_LABEL.to_string(), "x".to_string());
		assert_eq!(
			OwnerRef::from_labels(&labels),
			Some(OwnerRef {
				name: "a".to_string(),
				namespace: "x".to_string(),
			})
		);
	}

	#[test]
	fn test_from_labels_ignores_unrelated_keys() {
		let mut labels = BTreeMap::new();
		labels.insert("app".to_string(), "envoy".to_string());
		labels.insert(OWNING_CONTOUR_NS_LABEL.to_string(), "x".to_string());
		assert_eq!(OwnerRef::from_labels(&labels), None);
	}

	#[test]
	fn test_label_keys_are_stable() {
		assert_eq!(
			OWNING_CONTOUR_NAME_LABEL,
			"contour.operator.projectcontour.io/owning-contour-name"
		);
		assert_eq!(
			OWNING_CONTOUR_NS_LABEL,
			"contour.operator.projectcontour.io/owning-contour-namespace"
		);
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn single_owning_label_never_decodes(
			value in ".{0,30}",
			use_name_key in any::<bool>(),
		) {
			let key = if use_name_key {
				OWNING_CONTOUR_NAME_LABEL
			} else {
				OWNING_CONTOUR_NS_LABEL
			};
			let mut labels = BTreeMap::new();
			labels.insert(key.to_string(), value);
			prop_assert_eq!(OwnerRef::from_labels(&labels), None);
		}
	}
}
