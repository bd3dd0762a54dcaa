// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::common::ConfigMap;
use crate::types::v1beta1::kafka::require_positive;

/// A topic managed by the Topic Operator of a Kafka cluster.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(group = "kafka.strimzi.io", version = "v1beta1", kind = "KafkaTopic")]
#[kube(namespaced)]
#[kube(derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
pub struct KafkaTopicSpec {
    /// The number of partitions. It can be increased after creation but
    /// never decreased.
    pub partitions: i32,
    /// The number of replicas of each partition
    pub replicas: i32,
    /// Topic level configuration, e.g. `retention.ms`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigMap>,
    /// Name of the topic in Kafka. Defaults to the resource name; only set
    /// it when the topic name is not a valid Kubernetes name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
}

impl KafkaTopicSpec {
    pub fn new(partitions: i32, replicas: i32) -> Self {
        Self {
            partitions,
            replicas,
            config: None,
            topic_name: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("partitions", self.partitions)?;
        require_positive("replicas", self.replicas)
    }
}
