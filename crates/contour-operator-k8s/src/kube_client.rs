// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use contour_operator_api::Contour;
use kube::{
	api::{Api, ListParams},
	Client,
};
use tracing::{debug, instrument};

use crate::client::ContourStore;
use crate::error::K8sError;

/// Production Contour store using the kube crate.
#[derive(Clone)]
pub struct KubeClient {
	client: Client,
}

impl KubeClient {
	/// Create a new KubeClient that auto-discovers cluster configuration.
	///
	/// This will attempt to load config from:
	/// 1. In-cluster service account (when running in K8s)
	/// 2. KUBECONFIG environment variable
	/// 3. ~/.kube/config
	pub async fn new() -> Result<Self, K8sError> {
		let client = Client::try_default().await?;
		debug!("K8s client initialized");
		Ok(Self { client })
	}

	/// Wrap an already configured kube client.
	pub fn from_client(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl ContourStore for KubeClient {
	#[instrument(skip(self))]
	async fn get_contour(&self, namespace: &str, name: &str) -> Result<Contour, K8sError> {
		let contours: Api<Contour> = Api::namespaced(self.client.clone(), namespace);
		match contours.get(name).await {
			Ok(contour) => Ok(contour),
			Err(kube::Error::Api(err)) if err.code == 404 => Err(K8sError::ContourNotFound {
				namespace: namespace.into(),
				name: name.into(),
			}),
			Err(e) => Err(e.into()),
		}
	}

	#[instrument(skip(self))]
	async fn list_contours(&self) -> Result<Vec<Contour>, K8sError> {
		let contours: Api<Contour> = Api::all(self.client.clone());
		let list = contours.list(&ListParams::default()).await?;
		debug!(count = list.items.len(), "listed contours");
		Ok(list.items)
	}
}
