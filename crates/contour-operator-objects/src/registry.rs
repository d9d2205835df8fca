// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Queries over a snapshot of every Contour in the cluster.
//!
//! The snapshot is always passed in; nothing here caches Contours between
//! calls. Results are only as fresh as the list they were computed from.

use contour_operator_api::Contour;
use tracing::debug;

/// Outcome of [`others_exist`].
#[derive(Debug, Clone, PartialEq)]
pub enum OtherContours {
	/// The snapshot is empty or holds only the Contour itself.
	None,
	/// Other Contours may exist. Carries the full, unfiltered snapshot.
	Found(Vec<Contour>),
}

impl OtherContours {
	pub fn exist(&self) -> bool {
		matches!(self, OtherContours::Found(_))
	}

	/// The snapshot, or an empty list for [`OtherContours::None`].
	pub fn into_contours(self) -> Vec<Contour> {
		match self {
			OtherContours::None => Vec::new(),
			OtherContours::Found(contours) => contours,
		}
	}
}

fn name(contour: &Contour) -> &str {
	contour.metadata.name.as_deref().unwrap_or_default()
}

fn is_same_contour(a: &Contour, b: &Contour) -> bool {
	a.metadata.name == b.metadata.name && a.metadata.namespace == b.metadata.namespace
}

// Only the two cheap cases are decided here; the single-element check
// compares names only.
fn only_self(contour: &Contour, snapshot: &[Contour]) -> bool {
	match snapshot {
		[] => true,
		[single] => name(single) == name(contour),
		_ => false,
	}
}

/// Returns [`OtherContours::Found`] with the whole snapshot unless it is
/// empty or holds exactly one Contour named like `contour`.
pub fn others_exist(contour: &Contour, snapshot: Vec<Contour>) -> OtherContours {
	if only_self(contour, &snapshot) {
		return OtherContours::None;
	}
	OtherContours::Found(snapshot)
}

/// Contours other than `contour` that govern the same namespace.
///
/// `contour` itself is excluded by namespace and name before comparing
/// `spec.namespace.name`.
pub fn others_in_spec_ns<'a>(contour: &Contour, snapshot: &'a [Contour]) -> Vec<&'a Contour> {
	if only_self(contour, snapshot) {
		return Vec::new();
	}
	snapshot
		.iter()
		.filter(|c| !is_same_contour(c, contour))
		.filter(|c| c.spec.namespace.name == contour.spec.namespace.name)
		.collect()
}

/// Returns true if another Contour governs the same namespace as `contour`.
pub fn others_exist_in_spec_ns(contour: &Contour, snapshot: &[Contour]) -> bool {
	if only_self(contour, snapshot) {
		return false;
	}
	let found = snapshot
		.iter()
		.filter(|c| !is_same_contour(c, contour))
		.any(|c| c.spec.namespace.name == contour.spec.namespace.name);
	debug!(
		spec_namespace = %contour.spec.namespace.name,
		snapshot_len = snapshot.len(),
		found,
		"checked spec namespace uniqueness"
	);
	found
}

/// Contours whose `spec.gatewayClassRef` is set and equals `class`, in
/// snapshot order.
pub fn gateway_class_refs(snapshot: &[Contour], class: &str) -> Vec<Contour> {
	snapshot
		.iter()
		.filter(|c| c.spec.gateway_class_ref.as_deref() == Some(class))
		.cloned()
		.collect()
}
