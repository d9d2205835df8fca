// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Contour construction, ownership and uniqueness checks.
//!
//! Everything here is a pure function of the objects passed in, except the
//! [`lookup`] helpers which fetch a fresh snapshot from a [`ContourStore`]
//! first. Uniqueness is only detected, never enforced: two Contours created
//! concurrently are both visible only in a later snapshot.
//!
//! [`ContourStore`]: contour_operator_k8s::ContourStore

pub mod error;
pub mod factory;
pub mod lookup;
pub mod ownership;
pub mod registry;
pub mod selector;

pub use error::{ContourError, ContourResult};
pub use factory::{new_contour, ContourConfig, ENVOY_HTTPS_PORT, ENVOY_HTTP_PORT};
pub use lookup::{
	current_contour, ensure_unique_spec_ns, gateway_class_refs_exist, other_contours_exist,
	other_contours_exist_in_spec_ns,
};
pub use ownership::{is_owned_by, owner_labels_exist};
pub use registry::{
	gateway_class_refs, others_exist, others_exist_in_spec_ns, others_in_spec_ns, OtherContours,
};
pub use selector::{owning_selector, owning_selector_string};
