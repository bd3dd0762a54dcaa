// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{custom_resource_request, resource_metadata, with_cluster_label, ResourceOptions};
use crate::error::Result;
use crate::provision::{ResourceHandle, ResourceProvisioner};
use crate::types::v1alpha1::{KafkaConnector, KafkaConnectorSpec};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KafkaConnectorArgs {
    /// Name of the `KafkaConnect` resource running the connector
    pub cluster: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    pub spec: KafkaConnectorSpec,
}

pub fn kafka_connector_resource(
    name: &str,
    args: KafkaConnectorArgs,
    opts: &ResourceOptions,
) -> KafkaConnector {
    let metadata = resource_metadata(name, args.metadata, opts);
    KafkaConnector {
        metadata: with_cluster_label(metadata, &args.cluster),
        spec: args.spec,
    }
}

#[instrument(skip(provisioner, args, opts), fields(cluster = %args.cluster))]
pub async fn create_kafka_connector<P: ResourceProvisioner>(
    provisioner: &P,
    name: &str,
    args: KafkaConnectorArgs,
    opts: &ResourceOptions,
) -> Result<ResourceHandle> {
    let connector = kafka_connector_resource(name, args, opts);
    provisioner
        .create_resource(custom_resource_request(&connector, opts)?)
        .await
}
