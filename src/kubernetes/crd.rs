// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Strimzi CRD availability checking

use crate::constants::crd::{POLL_INTERVAL_SECS, POLL_MAX_INTERVAL_SECS};
use crate::constants::STRIMZI_GROUP;
use crate::error::{ProvisionError, Result};
use kube::{discovery::Discovery, Client};
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{info, warn};

/// Wait until the operator has registered the `Kafka` v1beta1 CRD.
/// Polls with exponential backoff starting at POLL_INTERVAL_SECS seconds and
/// gives up once `timeout` has elapsed.
pub async fn wait_for_strimzi_crds(client: &Client, timeout: Duration) -> Result<()> {
    let deadline = Instant::now() + timeout;
    let mut interval = POLL_INTERVAL_SECS;

    loop {
        match check_strimzi_crds_exist(client).await {
            Ok(true) => {
                info!("Strimzi CRDs ({}/v1beta1) are available", STRIMZI_GROUP);
                return Ok(());
            }
            Ok(false) => {
                info!(
                    "Strimzi CRDs ({}/v1beta1) not yet available, waiting {} seconds...",
                    STRIMZI_GROUP, interval
                );
            }
            Err(e) => {
                warn!(
                    "Error checking for Strimzi CRDs: {}, retrying in {} seconds...",
                    e, interval
                );
            }
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(ProvisionError::CrdUnavailable(format!(
                "{}/v1beta1 Kafka not served after {} seconds",
                STRIMZI_GROUP,
                timeout.as_secs()
            )));
        }
        sleep(Duration::from_secs(interval).min(remaining)).await;

        interval = (interval * 2).min(POLL_MAX_INTERVAL_SECS);
    }
}

/// Check if the Kafka CRD is served by attempting to discover it.
async fn check_strimzi_crds_exist(client: &Client) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[STRIMZI_GROUP])
        .run()
        .await?;

    for group in discovery.groups() {
        if group.name() == STRIMZI_GROUP {
            for (ar, _) in group.versioned_resources("v1beta1") {
                if ar.kind == "Kafka" {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}
