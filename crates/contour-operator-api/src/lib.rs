// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Contour custom resource types for the contour operator.
//!
//! This crate provides:
//! - The `Contour` custom resource (`operator.projectcontour.io/v1alpha1`)
//! - The owning label keys shared by everything that stamps or checks
//!   ownership of Contour child objects

pub mod contour;
pub mod labels;

pub use contour::{
	Condition, ContainerPort, Contour, ContourSpec, ContourStatus, EnvoyNetworkPublishing,
	NamespaceSpec, NetworkPublishing, NetworkPublishingType, UnknownNetworkPublishingType,
	DEFAULT_REPLICAS, DEFAULT_SPEC_NAMESPACE,
};
pub use labels::{owner_labels, OwnerRef, OWNING_CONTOUR_NAME_LABEL, OWNING_CONTOUR_NS_LABEL};
