// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{custom_resource_request, resource_metadata, ResourceOptions};
use crate::error::Result;
use crate::provision::{ResourceHandle, ResourceProvisioner};
use crate::types::v1beta1::{KafkaConnect, KafkaConnectSpec};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KafkaConnectArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    pub spec: KafkaConnectSpec,
}

pub fn kafka_connect_resource(
    name: &str,
    args: KafkaConnectArgs,
    opts: &ResourceOptions,
) -> KafkaConnect {
    KafkaConnect {
        metadata: resource_metadata(name, args.metadata, opts),
        spec: args.spec,
    }
}

#[instrument(skip(provisioner, args, opts))]
pub async fn create_kafka_connect<P: ResourceProvisioner>(
    provisioner: &P,
    name: &str,
    args: KafkaConnectArgs,
    opts: &ResourceOptions,
) -> Result<ResourceHandle> {
    let connect = kafka_connect_resource(name, args, opts);
    provisioner
        .create_resource(custom_resource_request(&connect, opts)?)
        .await
}
