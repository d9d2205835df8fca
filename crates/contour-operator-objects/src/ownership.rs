// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Ownership of child objects, derived from owning labels.

use std::collections::BTreeMap;

use contour_operator_api::{Contour, OWNING_CONTOUR_NAME_LABEL, OWNING_CONTOUR_NS_LABEL};
use kube::Resource;

/// Returns true if `labels` carry both owning labels of `contour`.
///
/// Missing labels, or only one matching label, mean "not owned". An unset
/// Contour name or namespace compares as the empty string.
pub fn owner_labels_exist(labels: Option<&BTreeMap<String, String>>, contour: &Contour) -> bool {
	let Some(labels) = labels else {
		return false;
	};
	let name = contour.metadata.name.as_deref().unwrap_or_default();
	let namespace = contour.metadata.namespace.as_deref().unwrap_or_default();

	labels.get(OWNING_CONTOUR_NAME_LABEL).map(String::as_str) == Some(name)
		&& labels.get(OWNING_CONTOUR_NS_LABEL).map(String::as_str) == Some(namespace)
}

/// Returns true if `obj` is owned by `contour` according to its labels.
pub fn is_owned_by<K: Resource>(obj: &K, contour: &Contour) -> bool {
	owner_labels_exist(obj.meta().labels.as_ref(), contour)
}

#[cfg(test)]
mod tests {
	use super::*;
	use contour_operator_api::{owner_labels, ContourSpec};
	use k8s_openapi::api::apps::v1::Deployment;
	use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

	fn contour(ns: &str, name: &str) -> Contour {
		let mut c = Contour::new(name, ContourSpec::default());
		c.metadata.namespace = Some(ns.to_string());
		c
	}

	fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_absent_labels_not_owned() {
		assert!(!owner_labels_exist(None, &contour("x", "a")));
	}

	#[test]
	fn test_empty_labels_not_owned() {
		assert!(!owner_labels_exist(
			Some(&BTreeMap::new()),
			&contour("x", "a")
		));
	}

	#[test]
	fn test_both_labels_owned() {
		let l = labels(&[
			(OWNING_CONTOUR_NAME_LABEL, "a"),
			(OWNING_CONTOUR_NS_LABEL, "x"),
			("app", "envoy"),
		]);
		assert!(owner_labels_exist(Some(&l), &contour("x", "a")));
	}

	#[test]
	fn test_name_label_only_not_owned() {
		let l = labels(&[(OWNING_CONTOUR_NAME_LABEL, "a")]);
		assert!(!owner_labels_exist(Some(&l), &contour("x", "a")));
	}

	#[test]
	fn test_namespace_label_only_not_owned() {
		let l = labels(&[(OWNING_CONTOUR_NS_LABEL, "x")]);
		assert!(!owner_labels_exist(Some(&l), &contour("x", "a")));
	}

	#[test]
	fn test_labels_of_other_contour_not_owned() {
		let l = labels(&[
			(OWNING_CONTOUR_NAME_LABEL, "a"),
			(OWNING_CONTOUR_NS_LABEL, "y"),
		]);
		assert!(!owner_labels_exist(Some(&l), &contour("x", "a")));
	}

	#[test]
	fn test_comparison_is_case_sensitive() {
		let l = labels(&[
			(OWNING_CONTOUR_NAME_LABEL, "A"),
			(OWNING_CONTOUR_NS_LABEL, "x"),
		]);
		assert!(!owner_labels_exist(Some(&l), &contour("x", "a")));
	}

	#[test]
	fn test_is_owned_by_reads_object_labels() {
		let owner = contour("x", "a");
		let owned = Deployment {
			metadata: ObjectMeta {
				name: Some("envoy".to_string()),
				labels: Some(owner_labels(&owner)),
				..Default::default()
			},
			..Default::default()
		};
		let unlabeled = Deployment::default();

		assert!(is_owned_by(&owned, &owner));
		assert!(!is_owned_by(&unlabeled, &owner));
		assert!(!is_owned_by(&owned, &contour("x", "b")));
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use contour_operator_api::{owner_labels, ContourSpec};
	use proptest::prelude::*;

	fn contour(ns: &str, name: &str) -> Contour {
		let mut c = Contour::new(name, ContourSpec::default());
		c.metadata.namespace = Some(ns.to_string());
		c
	}

	proptest! {
		#[test]
		fn owner_labels_always_owned(
			name in "[a-z0-9][a-z0-9-]{0,30}",
			ns in "[a-z0-9][a-z0-9-]{0,30}",
			extra in prop::collection::btree_map("[a-z]{1,10}", ".{0,10}", 0..8),
		) {
			let c = contour(&ns, &name);
			let mut labels = extra;
			labels.extend(owner_labels(&c));
			prop_assert!(owner_labels_exist(Some(&labels), &c));
		}

		#[test]
		fn missing_either_label_never_owned(
			name in "[a-z0-9][a-z0-9-]{0,30}",
			ns in "[a-z0-9][a-z0-9-]{0,30}",
			drop_name in any::<bool>(),
			extra in prop::collection::btree_map("[a-z]{1,10}", ".{0,10}", 0..8),
		) {
			let c = contour(&ns, &name);
			let mut labels = extra;
			labels.extend(owner_labels(&c));
			if drop_name {
				labels.remove(OWNING_CONTOUR_NAME_LABEL);
			} else {
				labels.remove(OWNING_CONTOUR_NS_LABEL);
			}
			prop_assert!(!owner_labels_exist(Some(&labels), &c));
		}
	}
}
