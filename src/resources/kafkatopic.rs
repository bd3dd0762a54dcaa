// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{custom_resource_request, resource_metadata, with_cluster_label, ResourceOptions};
use crate::error::Result;
use crate::provision::{ResourceHandle, ResourceProvisioner};
use crate::types::v1beta1::{KafkaTopic, KafkaTopicSpec};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KafkaTopicArgs {
    /// Name of the `Kafka` resource the topic belongs to
    pub cluster: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    pub spec: KafkaTopicSpec,
}

/// Build the `KafkaTopic` resource, labelled with its cluster.
pub fn kafka_topic_resource(name: &str, args: KafkaTopicArgs, opts: &ResourceOptions) -> KafkaTopic {
    let metadata = resource_metadata(name, args.metadata, opts);
    KafkaTopic {
        metadata: with_cluster_label(metadata, &args.cluster),
        spec: args.spec,
    }
}

#[instrument(skip(provisioner, args, opts), fields(cluster = %args.cluster))]
pub async fn create_kafka_topic<P: ResourceProvisioner>(
    provisioner: &P,
    name: &str,
    args: KafkaTopicArgs,
    opts: &ResourceOptions,
) -> Result<ResourceHandle> {
    let topic = kafka_topic_resource(name, args, opts);
    provisioner
        .create_resource(custom_resource_request(&topic, opts)?)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::labels;
    use crate::provision::RecordingProvisioner;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_orders_topic_request() {
        let recorder = RecordingProvisioner::new();
        let args = KafkaTopicArgs {
            cluster: "prod-kafka".to_string(),
            metadata: None,
            spec: KafkaTopicSpec::new(6, 3),
        };

        create_kafka_topic(&recorder, "orders", args, &ResourceOptions::default())
            .await
            .unwrap();

        let requests = recorder.resource_requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        let types = request.object.types.as_ref().unwrap();
        assert_eq!(types.kind, "KafkaTopic");
        assert_eq!(types.api_version, "kafka.strimzi.io/v1beta1");
        assert_eq!(request.name(), "orders");
        assert_eq!(
            request.object.metadata.labels.as_ref().unwrap()[labels::CLUSTER],
            "prod-kafka"
        );
        assert_eq!(request.object.data["spec"], json!({"partitions": 6, "replicas": 3}));
    }

    #[test]
    fn test_caller_labels_are_merged_and_cluster_label_wins() {
        let args = KafkaTopicArgs {
            cluster: "prod-kafka".to_string(),
            metadata: Some(ObjectMeta {
                labels: Some(BTreeMap::from([
                    ("team".to_string(), "payments".to_string()),
                    (labels::CLUSTER.to_string(), "staging-kafka".to_string()),
                ])),
                ..Default::default()
            }),
            spec: KafkaTopicSpec::new(6, 3),
        };

        let topic = kafka_topic_resource("orders", args, &ResourceOptions::default());
        let topic_labels = topic.metadata.labels.unwrap();
        assert_eq!(topic_labels[labels::CLUSTER], "prod-kafka");
        assert_eq!(topic_labels["team"], "payments");
    }

    #[test]
    fn test_topic_name_stays_in_spec() {
        let mut spec = KafkaTopicSpec::new(1, 1);
        spec.topic_name = Some("Orders.V1".to_string());
        let args = KafkaTopicArgs {
            cluster: "prod-kafka".to_string(),
            metadata: None,
            spec: spec.clone(),
        };

        let topic = kafka_topic_resource("orders-v1", args, &ResourceOptions::default());
        assert_eq!(topic.metadata.name.as_deref(), Some("orders-v1"));
        assert_eq!(topic.spec, spec);
    }
}
