// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Helm chart installation through the `helm` binary

use super::{ChartHandle, ChartInstallRequest, ChartInstaller};
use crate::error::{ProvisionError, Result};
use std::io;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, instrument};
use url::Url;

/// Installs charts with `helm upgrade --install`, so re-running a deployment
/// is a no-op for an unchanged release.
#[derive(Clone, Debug)]
pub struct HelmCli {
    binary: String,
    kube_context: Option<String>,
}

impl HelmCli {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            kube_context: None,
        }
    }

    pub fn with_kube_context(mut self, context: Option<String>) -> Self {
        self.kube_context = context;
        self
    }

    /// Arguments passed to helm for a request. Values, if any, are read from stdin.
    pub fn command_args(&self, request: &ChartInstallRequest) -> Vec<String> {
        let (repo_flag, chart_ref) = chart_reference(&request.repo, &request.chart);

        let mut args = vec![
            "upgrade".to_string(),
            "--install".to_string(),
            request.release.clone(),
            chart_ref,
            "--version".to_string(),
            request.version.clone(),
        ];
        if let Some(repo) = repo_flag {
            args.extend(["--repo".to_string(), repo]);
        }
        if let Some(ns) = &request.namespace {
            args.extend([
                "--namespace".to_string(),
                ns.clone(),
                "--create-namespace".to_string(),
            ]);
        }
        if let Some(context) = &self.kube_context {
            args.extend(["--kube-context".to_string(), context.clone()]);
        }
        if request.values.is_some() {
            args.extend(["--values".to_string(), "-".to_string()]);
        }
        args
    }
}

/// Split a repository into the `--repo` flag value (if any) and the chart
/// reference helm expects.
fn chart_reference(repo: &str, chart: &str) -> (Option<String>, String) {
    match Url::parse(repo) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            (Some(repo.to_string()), chart.to_string())
        }
        Ok(url) if url.scheme() == "oci" => {
            (None, format!("{}/{}", repo.trim_end_matches('/'), chart))
        }
        _ => (None, format!("{}/{}", repo, chart)),
    }
}

impl ChartInstaller for HelmCli {
    #[instrument(skip(self, request), fields(release = %request.release, chart = %request.chart))]
    async fn install_chart(&self, request: ChartInstallRequest) -> Result<ChartHandle> {
        let values = request
            .values
            .as_ref()
            .map(serde_yaml::to_string)
            .transpose()?;
        let args = self.command_args(&request);
        debug!("Running {} {}", self.binary, args.join(" "));

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(if values.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let writer = match (values, child.stdin.take()) {
            (Some(values), Some(mut stdin)) => Some(tokio::spawn(async move {
                stdin.write_all(values.as_bytes()).await?;
                stdin.shutdown().await
            })),
            _ => None,
        };

        let output = child.wait_with_output().await?;
        let written = match writer {
            Some(task) => task.await.map_err(io::Error::other)?,
            None => Ok(()),
        };
        if !output.status.success() {
            return Err(ProvisionError::ChartInstallError(format!(
                "helm exited with {} installing release {}: {}",
                output.status,
                request.release,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        // a clean exit with undelivered values is still a failure
        written?;

        info!(
            "Installed chart {} {} as release {}",
            request.chart, request.version, request.release
        );
        Ok(ChartHandle::from(&request))
    }
}
