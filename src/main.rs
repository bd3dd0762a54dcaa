// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use strimzi_deploy::config::Config;
use strimzi_deploy::kubernetes::{create_client, ensure_namespace_exists, wait_for_strimzi_crds};
use strimzi_deploy::provision::{HelmCli, KubeProvisioner, RecordingProvisioner};
use strimzi_deploy::stack::Stack;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, logs go to stderr so a dry run can be piped to kubectl
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("Deploying stack from {}", config.stack_file.display());

    let stack = Stack::from_path(&config.stack_file)
        .with_context(|| format!("Failed to load stack {}", config.stack_file.display()))?;
    if config.skip_validation {
        info!("Skipping stack validation");
    } else {
        stack.validate()?;
    }
    let opts = stack.resource_options(false, Some(config.field_manager.clone()));

    if config.dry_run {
        let recorder = RecordingProvisioner::new();
        stack.deploy(&recorder, &recorder, &opts).await?;
        print!("{}", recorder.render_manifest()?);
        return Ok(());
    }

    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    if let Some(namespace) = &stack.namespace {
        ensure_namespace_exists(&client, namespace).await?;
    }

    let helm = HelmCli::new(config.helm_binary.clone()).with_kube_context(config.kube_context.clone());
    if let Some(release) = stack.install_operator(&helm).await? {
        info!("Operator release {} installed", release.release);
        if !config.crd_wait_timeout.is_zero() {
            info!("Waiting for Strimzi CRDs to become available...");
            wait_for_strimzi_crds(&client, config.crd_wait_timeout).await?;
        }
    }

    let provisioner = KubeProvisioner::new(client);
    let handles = stack.apply_resources(&provisioner, &opts).await?;
    for handle in &handles {
        info!(
            "{} {}/{} requested",
            handle.kind,
            handle.namespace.as_deref().unwrap_or("-"),
            handle.name
        );
    }

    Ok(())
}
