// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The two primitives resources are provisioned through: creating a custom
//! resource and installing a Helm chart. Implementations talk to the API
//! server ([`KubeProvisioner`]), shell out to helm ([`HelmCli`]) or record
//! the requests for a dry run ([`RecordingProvisioner`]).

pub mod helm;
pub mod kube_api;
pub mod recording;

pub use helm::HelmCli;
pub use kube_api::KubeProvisioner;
pub use recording::RecordingProvisioner;

use crate::error::Result;
use kube::api::{ApiResource, DynamicObject};
use kube::ResourceExt;
use std::future::Future;

/// A request to create one custom resource.
#[derive(Clone, Debug)]
pub struct CustomResourceRequest {
    pub resource: ApiResource,
    pub object: DynamicObject,
    pub dry_run: bool,
    pub field_manager: Option<String>,
}

impl CustomResourceRequest {
    pub fn name(&self) -> String {
        self.object.name_any()
    }

    pub fn namespace(&self) -> Option<String> {
        self.object.namespace()
    }
}

/// What a provisioner returns for a created custom resource.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceHandle {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub namespace: Option<String>,
    pub uid: Option<String>,
}

impl ResourceHandle {
    /// Describe the object as returned by the provisioner, falling back to
    /// the requested type when the response carries none.
    pub fn from_object(object: &DynamicObject, requested: &ApiResource) -> Self {
        let (api_version, kind) = match &object.types {
            Some(t) => (t.api_version.clone(), t.kind.clone()),
            None => (requested.api_version.clone(), requested.kind.clone()),
        };
        Self {
            api_version,
            kind,
            name: object.name_any(),
            namespace: object.namespace(),
            uid: object.uid(),
        }
    }
}

/// A request to install (or upgrade) one Helm release.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartInstallRequest {
    pub release: String,
    pub repo: String,
    pub chart: String,
    pub version: String,
    pub namespace: Option<String>,
    pub values: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartHandle {
    pub release: String,
    pub namespace: Option<String>,
    pub chart: String,
    pub version: String,
}

impl From<&ChartInstallRequest> for ChartHandle {
    fn from(request: &ChartInstallRequest) -> Self {
        Self {
            release: request.release.clone(),
            namespace: request.namespace.clone(),
            chart: request.chart.clone(),
            version: request.version.clone(),
        }
    }
}

/// Creates custom resources.
pub trait ResourceProvisioner {
    fn create_resource(
        &self,
        request: CustomResourceRequest,
    ) -> impl Future<Output = Result<ResourceHandle>> + Send;
}

/// Installs Helm charts.
pub trait ChartInstaller {
    fn install_chart(
        &self,
        request: ChartInstallRequest,
    ) -> impl Future<Output = Result<ChartHandle>> + Send;
}
