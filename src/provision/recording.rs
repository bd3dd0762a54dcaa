// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory provisioner used for dry runs

use super::{
    ChartHandle, ChartInstallRequest, ChartInstaller, CustomResourceRequest, ResourceHandle,
    ResourceProvisioner,
};
use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// A request captured by [`RecordingProvisioner`], in issue order.
#[derive(Clone, Debug)]
pub enum RecordedRequest {
    Chart(ChartInstallRequest),
    Resource(CustomResourceRequest),
}

/// Records requests instead of sending them anywhere.
#[derive(Clone, Default)]
pub struct RecordingProvisioner {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RecordingProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().clone()
    }

    pub fn resource_requests(&self) -> Vec<CustomResourceRequest> {
        self.lock()
            .iter()
            .filter_map(|r| match r {
                RecordedRequest::Resource(req) => Some(req.clone()),
                RecordedRequest::Chart(_) => None,
            })
            .collect()
    }

    pub fn chart_requests(&self) -> Vec<ChartInstallRequest> {
        self.lock()
            .iter()
            .filter_map(|r| match r {
                RecordedRequest::Chart(req) => Some(req.clone()),
                RecordedRequest::Resource(_) => None,
            })
            .collect()
    }

    /// Render the recorded custom resources as a multi-document YAML stream
    /// that `kubectl apply -f -` accepts. Chart installs are listed as comments.
    pub fn render_manifest(&self) -> Result<String> {
        let mut out = String::new();
        for request in self.lock().iter() {
            out.push_str("---\n");
            match request {
                RecordedRequest::Chart(chart) => {
                    out.push_str(&format!(
                        "# helm release {} ({}/{} {}) in namespace {}\n",
                        chart.release,
                        chart.repo,
                        chart.chart,
                        chart.version,
                        chart.namespace.as_deref().unwrap_or("<default>")
                    ));
                }
                RecordedRequest::Resource(resource) => {
                    out.push_str(&serde_yaml::to_string(&resource.object)?);
                }
            }
        }
        Ok(out)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ResourceProvisioner for RecordingProvisioner {
    async fn create_resource(&self, request: CustomResourceRequest) -> Result<ResourceHandle> {
        debug!("Recording {} {}", request.resource.kind, request.name());
        let handle = ResourceHandle::from_object(&request.object, &request.resource);
        self.lock().push(RecordedRequest::Resource(request));
        Ok(handle)
    }
}

impl ChartInstaller for RecordingProvisioner {
    async fn install_chart(&self, request: ChartInstallRequest) -> Result<ChartHandle> {
        debug!("Recording helm release {}", request.release);
        let handle = ChartHandle::from(&request);
        self.lock().push(RecordedRequest::Chart(request));
        Ok(handle)
    }
}
