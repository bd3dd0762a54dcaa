// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from the local kubeconfig or in-cluster environment

use crate::config::Config;
use crate::error::{ProvisionError, Result};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a client for the target cluster, honouring `KUBE_CONTEXT` when set.
#[instrument(skip(config), fields(context = ?config.kube_context))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = match &config.kube_context {
        Some(context) => {
            debug!("Using kubeconfig context {}", context);
            let options = KubeConfigOptions {
                context: Some(context.clone()),
                ..Default::default()
            };
            KConfig::from_kubeconfig(&options).await.map_err(|e| {
                ProvisionError::KubeconfigError(format!(
                    "Failed to load context {}: {}",
                    context, e
                ))
            })?
        }
        None => KConfig::infer()
            .await
            .map_err(|e| ProvisionError::KubeconfigError(format!("Failed to infer config: {}", e)))?,
    };

    debug!("Connecting to {}", client_config.cluster_url);
    Client::try_from(client_config)
        .map_err(|e| ProvisionError::KubeconfigError(format!("Failed to create client: {}", e)))
}
