// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use contour_operator_api::Contour;

use crate::client::ContourStore;
use crate::error::K8sError;

#[derive(Debug, Default)]
struct MockState {
	contours: Vec<Contour>,
	list_error: Option<K8sError>,
}

/// An in-memory Contour store for tests.
///
/// Contours are returned by `list_contours` in insertion order. A list error
/// can be configured to simulate an unreachable API server.
#[derive(Debug, Clone, Default)]
pub struct MockContourStore {
	state: Arc<Mutex<MockState>>,
	list_calls: Arc<AtomicUsize>,
}

impl MockContourStore {
	/// Create an empty mock store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a mock store holding `contours`.
	pub fn with_contours(contours: impl IntoIterator<Item = Contour>) -> Self {
		let store = Self::new();
		for contour in contours {
			store.insert(contour);
		}
		store
	}

	/// Add a Contour to the store.
	pub fn insert(&self, contour: Contour) {
		self.lock().contours.push(contour);
	}

	/// Make every subsequent `list_contours` call fail with `err`.
	pub fn fail_list(&self, err: K8sError) {
		self.lock().list_error = Some(err);
	}

	/// Number of `list_contours` calls made so far.
	pub fn list_calls(&self) -> usize {
		self.list_calls.load(Ordering::SeqCst)
	}

	fn lock(&self) -> MutexGuard<'_, MockState> {
		self.state.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

#[async_trait]
impl ContourStore for MockContourStore {
	async fn get_contour(&self, namespace: &str, name: &str) -> Result<Contour, K8sError> {
		self
			.lock()
			.contours
			.iter()
			.find(|c| {
				c.metadata.namespace.as_deref() == Some(namespace)
					&& c.metadata.name.as_deref() == Some(name)
			})
			.cloned()
			.ok_or_else(|| K8sError::ContourNotFound {
				namespace: namespace.into(),
				name: name.into(),
			})
	}

	async fn list_contours(&self) -> Result<Vec<Contour>, K8sError> {
		self.list_calls.fetch_add(1, Ordering::SeqCst);
		let state = self.lock();
		match &state.list_error {
			Some(err) => Err(err.clone()),
			None => Ok(state.contours.clone()),
		}
	}
}
