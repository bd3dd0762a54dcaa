// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{custom_resource_request, resource_metadata, ResourceOptions};
use crate::error::Result;
use crate::provision::{ResourceHandle, ResourceProvisioner};
use crate::types::v1beta1::{Kafka, KafkaSpec};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KafkaClusterArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    pub spec: KafkaSpec,
}

/// Build the `Kafka` resource, with the spec embedded verbatim.
pub fn kafka_resource(name: &str, args: KafkaClusterArgs, opts: &ResourceOptions) -> Kafka {
    Kafka {
        metadata: resource_metadata(name, args.metadata, opts),
        spec: args.spec,
    }
}

#[instrument(skip(provisioner, args, opts))]
pub async fn create_kafka<P: ResourceProvisioner>(
    provisioner: &P,
    name: &str,
    args: KafkaClusterArgs,
    opts: &ResourceOptions,
) -> Result<ResourceHandle> {
    let kafka = kafka_resource(name, args, opts);
    provisioner
        .create_resource(custom_resource_request(&kafka, opts)?)
        .await
}
