// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource creation against a live API server

use super::{CustomResourceRequest, ResourceHandle, ResourceProvisioner};
use crate::error::Result;
use kube::{
    api::{DynamicObject, PostParams},
    Api, Client,
};
use tracing::{debug, info, instrument};

/// Creates custom resources through the Kubernetes API.
#[derive(Clone)]
pub struct KubeProvisioner {
    client: Client,
}

impl KubeProvisioner {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api_for(&self, request: &CustomResourceRequest) -> Api<DynamicObject> {
        match request.namespace() {
            Some(ns) => Api::namespaced_with(self.client.clone(), &ns, &request.resource),
            None => Api::default_namespaced_with(self.client.clone(), &request.resource),
        }
    }
}

impl ResourceProvisioner for KubeProvisioner {
    #[instrument(
        skip(self, request),
        fields(kind = %request.resource.kind, name = %request.name())
    )]
    async fn create_resource(&self, request: CustomResourceRequest) -> Result<ResourceHandle> {
        let api = self.api_for(&request);
        let pp = PostParams {
            dry_run: request.dry_run,
            field_manager: request.field_manager.clone(),
        };

        debug!(
            "Creating {} {} (dry_run={})",
            request.resource.api_version,
            request.name(),
            request.dry_run
        );

        let created = api.create(&pp, &request.object).await?;
        let handle = ResourceHandle::from_object(&created, &request.resource);

        info!(
            "Created {} {}/{}",
            handle.kind,
            handle.namespace.as_deref().unwrap_or("-"),
            handle.name
        );
        Ok(handle)
    }
}
