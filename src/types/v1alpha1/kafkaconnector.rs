// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

use crate::error::{ProvisionError, Result};
use crate::types::common::ConfigMap;
use crate::types::v1beta1::kafka::require_positive;

/// A connector instance running on a Kafka Connect cluster.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(group = "kafka.strimzi.io", version = "v1alpha1", kind = "KafkaConnector")]
#[kube(namespaced)]
#[kube(derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
pub struct KafkaConnectorSpec {
    /// Fully qualified connector class
    pub class: String,
    /// Maximum number of tasks the connector may create
    pub tasks_max: i32,
    /// Connector configuration, passed to Connect unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause: Option<bool>,
}

impl KafkaConnectorSpec {
    pub fn validate(&self) -> Result<()> {
        if self.class.trim().is_empty() {
            return Err(ProvisionError::ValidationError(
                "connector class must not be empty".to_string(),
            ));
        }
        require_positive("tasksMax", self.tasks_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connector_spec_round_trips() {
        let value = json!({
            "class": "org.apache.kafka.connect.file.FileStreamSourceConnector",
            "tasksMax": 2,
            "config": {"file": "/opt/kafka/LICENSE", "topic": "my-topic"},
            "pause": true
        });

        let spec: KafkaConnectorSpec = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(spec.tasks_max, 2);
        assert_eq!(spec.pause, Some(true));
        assert_eq!(serde_json::to_value(&spec).unwrap(), value);
    }

    #[test]
    fn test_class_and_tasks_max_are_required() {
        assert!(serde_json::from_value::<KafkaConnectorSpec>(json!({"tasksMax": 1})).is_err());
        assert!(serde_json::from_value::<KafkaConnectorSpec>(json!({"class": "Sink"})).is_err());
    }

    #[test]
    fn test_validate() {
        let mut spec = KafkaConnectorSpec {
            class: "org.example.Sink".to_string(),
            tasks_max: 1,
            config: None,
            pause: None,
        };
        assert!(spec.validate().is_ok());

        spec.tasks_max = 0;
        assert!(spec.validate().is_err());

        spec.tasks_max = 1;
        spec.class = String::new();
        assert!(spec.validate().is_err());
    }
}
