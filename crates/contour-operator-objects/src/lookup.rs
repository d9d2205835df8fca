// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Store-backed Contour lookups.
//!
//! Each call lists or gets Contours afresh and then defers to the pure
//! functions in [`crate::registry`].

use contour_operator_api::Contour;
use contour_operator_k8s::{ContourStore, K8sResult};
use tracing::{debug, instrument, warn};

use crate::error::{ContourError, ContourResult};
use crate::registry::{self, OtherContours};

async fn list(store: &dyn ContourStore) -> ContourResult<Vec<Contour>> {
	store
		.list_contours()
		.await
		.map_err(|source| ContourError::List { source })
}

/// Get the current Contour for `namespace/name`.
///
/// Store errors, including not-found, are returned unchanged.
#[instrument(skip(store))]
pub async fn current_contour(
	store: &dyn ContourStore,
	namespace: &str,
	name: &str,
) -> K8sResult<Contour> {
	store.get_contour(namespace, name).await
}

/// List Contours in all namespaces and report whether any exist other than
/// `contour`. See [`registry::others_exist`].
#[instrument(skip_all, fields(name = ?contour.metadata.name, namespace = ?contour.metadata.namespace))]
pub async fn other_contours_exist(
	store: &dyn ContourStore,
	contour: &Contour,
) -> ContourResult<OtherContours> {
	let snapshot = list(store).await?;
	debug!(count = snapshot.len(), "listed contours");
	Ok(registry::others_exist(contour, snapshot))
}

/// List Contours in all namespaces and report whether another one governs
/// the same `spec.namespace.name` as `contour`.
#[instrument(skip_all, fields(name = ?contour.metadata.name, spec_namespace = %contour.spec.namespace.name))]
pub async fn other_contours_exist_in_spec_ns(
	store: &dyn ContourStore,
	contour: &Contour,
) -> ContourResult<bool> {
	let others = other_contours_exist(store, contour).await?;
	let OtherContours::Found(snapshot) = others else {
		return Ok(false);
	};
	Ok(registry::others_exist_in_spec_ns(contour, &snapshot))
}

/// Fail with [`ContourError::SpecNamespaceConflict`] if another Contour
/// governs the same namespace as `contour`.
///
/// The check is advisory: a Contour created after the list is not seen.
#[instrument(skip_all, fields(name = ?contour.metadata.name, spec_namespace = %contour.spec.namespace.name))]
pub async fn ensure_unique_spec_ns(
	store: &dyn ContourStore,
	contour: &Contour,
) -> ContourResult<()> {
	let snapshot = list(store).await?;
	let conflicting: Vec<String> = registry::others_in_spec_ns(contour, &snapshot)
		.into_iter()
		.map(|c| {
			format!(
				"{}/{}",
				c.metadata.namespace.as_deref().unwrap_or_default(),
				c.metadata.name.as_deref().unwrap_or_default()
			)
		})
		.collect();

	if conflicting.is_empty() {
		return Ok(());
	}

	warn!(conflicting = ?conflicting, "spec namespace already governed by another contour");
	Err(ContourError::SpecNamespaceConflict {
		namespace: contour.spec.namespace.name.clone(),
		conflicting,
	})
}

/// List Contours in all namespaces and return those referencing the
/// GatewayClass `class`. Store errors are returned unchanged.
#[instrument(skip(store))]
pub async fn gateway_class_refs_exist(
	store: &dyn ContourStore,
	class: &str,
) -> K8sResult<Vec<Contour>> {
	let snapshot = store.list_contours().await?;
	let found = registry::gateway_class_refs(&snapshot, class);
	debug!(count = found.len(), "found contours referencing gateway class");
	Ok(found)
}
