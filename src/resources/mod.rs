// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Constructors turning typed arguments into provisioning requests.
//!
//! Every constructor comes in two halves: a pure builder returning the typed
//! resource, and an async `create_*`/`install_*` function issuing exactly one
//! request through a provisioner. Nothing is validated or retried here.

pub mod kafka;
pub mod kafkaconnect;
pub mod kafkaconnector;
pub mod kafkatopic;
pub mod operator;

pub use kafka::{create_kafka, kafka_resource, KafkaClusterArgs};
pub use kafkaconnect::{create_kafka_connect, kafka_connect_resource, KafkaConnectArgs};
pub use kafkaconnector::{create_kafka_connector, kafka_connector_resource, KafkaConnectorArgs};
pub use kafkatopic::{create_kafka_topic, kafka_topic_resource, KafkaTopicArgs};
pub use operator::{install_kafka_operator, operator_chart_request, KafkaOperatorArgs};

use crate::constants::labels;
use crate::error::Result;
use crate::provision::CustomResourceRequest;
use kube::api::{ApiResource, DynamicObject, ObjectMeta};
use kube::Resource;
use serde::Serialize;

/// Options applying to the request rather than to the resource itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceOptions {
    /// Namespace used when the resource metadata names none
    pub namespace: Option<String>,
    /// Ask the API server to validate without persisting
    pub dry_run: bool,
    pub field_manager: Option<String>,
}

/// Caller metadata completed with the resource name and default namespace.
/// Values already present in `metadata` are kept.
pub(crate) fn resource_metadata(
    name: &str,
    metadata: Option<ObjectMeta>,
    opts: &ResourceOptions,
) -> ObjectMeta {
    let mut metadata = metadata.unwrap_or_default();
    metadata.name.get_or_insert_with(|| name.to_string());
    if metadata.namespace.is_none() {
        metadata.namespace = opts.namespace.clone();
    }
    metadata
}

/// Attach a resource to its parent cluster. The injected label overrides a
/// caller label with the same key; other caller labels are kept.
pub(crate) fn with_cluster_label(mut metadata: ObjectMeta, cluster: &str) -> ObjectMeta {
    metadata
        .labels
        .get_or_insert_with(Default::default)
        .insert(labels::CLUSTER.to_string(), cluster.to_string());
    metadata
}

/// Erase a typed resource into the request shape provisioners accept.
pub(crate) fn custom_resource_request<K>(
    resource: &K,
    opts: &ResourceOptions,
) -> Result<CustomResourceRequest>
where
    K: Resource<DynamicType = ()> + Serialize,
{
    let object: DynamicObject = serde_json::from_value(serde_json::to_value(resource)?)?;
    Ok(CustomResourceRequest {
        resource: ApiResource::erase::<K>(&()),
        object,
        dry_run: opts.dry_run,
        field_manager: opts.field_manager.clone(),
    })
}
