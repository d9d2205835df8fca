// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use contour_operator_api::{owner_labels, Contour};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;

/// Label selector matching every child owned by `contour`.
pub fn owning_selector(contour: &Contour) -> LabelSelector {
	LabelSelector {
		match_labels: Some(owner_labels(contour)),
		match_expressions: None,
	}
}

/// [`owning_selector`] rendered for `ListParams::labels`, keys sorted.
pub fn owning_selector_string(contour: &Contour) -> String {
	owner_labels(contour)
		.iter()
		.map(|(k, v)| format!("{k}={v}"))
		.collect::<Vec<_>>()
		.join(",")
}
