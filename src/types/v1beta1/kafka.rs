// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::core::v1::{Affinity, ResourceRequirements, Toleration};
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{ProvisionError, Result};
use crate::types::common::{ConfigMap, JvmOptions, Logging, OpenRecord, Probe, Sidecar};

/// Desired state of a Kafka cluster together with its ZooKeeper ensemble.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(group = "kafka.strimzi.io", version = "v1beta1", kind = "Kafka")]
#[kube(namespaced)]
#[kube(derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
pub struct KafkaSpec {
    /// Configuration of the Kafka cluster
    pub kafka: KafkaClusterSpec,
    /// Configuration of the ZooKeeper cluster
    pub zookeeper: ZookeeperClusterSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_operator: Option<EntityOperatorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kafka_exporter: Option<KafkaExporterSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_ca: Option<CertificateAuthority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients_ca: Option<CertificateAuthority>,
    /// Cron expressions during which certificate renewal may roll pods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_time_windows: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaClusterSpec {
    /// The number of broker pods
    pub replicas: i32,
    /// Storage configuration (disk). Cannot be updated.
    pub storage: KafkaStorage,
    /// Kafka version, the operator picks its default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Broker image, defaults to the one matching `version`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listeners: Option<Listeners>,
    /// Broker config. Properties controlling listeners, security and
    /// ZooKeeper connectivity are managed by the operator and rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jvm_options: Option<JvmOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jmx_options: Option<JmxOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rack: Option<Rack>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,
    /// Prometheus JMX exporter configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<OpenRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_sidecar: Option<Sidecar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<OpenRecord>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum KafkaStorageType {
    Ephemeral,
    PersistentClaim,
    Jbod,
}

/// Broker storage. `size` is mandatory for `persistent-claim`, `volumes`
/// (each with a unique `id`) for `jbod`; see [`KafkaStorage::validate`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaStorage {
    #[serde(rename = "type")]
    pub storage_type: KafkaStorageType,
    /// Size of the persistent volume claim, e.g. `100Gi`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Storage class used for dynamic provisioning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Delete the claim when the cluster is un-deployed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_claim: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Volumes of a `jbod` storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<SingleVolumeStorage>>,
}

impl KafkaStorage {
    pub fn validate(&self) -> Result<()> {
        match self.storage_type {
            KafkaStorageType::Ephemeral => Ok(()),
            KafkaStorageType::PersistentClaim => require_size(&self.size),
            KafkaStorageType::Jbod => {
                let volumes = self.volumes.as_deref().unwrap_or_default();
                if volumes.is_empty() {
                    return Err(ProvisionError::ValidationError(
                        "jbod storage requires at least one volume".to_string(),
                    ));
                }
                let mut ids = HashSet::new();
                for volume in volumes {
                    volume.validate()?;
                    let id = volume.id.ok_or_else(|| {
                        ProvisionError::ValidationError(
                            "every jbod volume requires an id".to_string(),
                        )
                    })?;
                    if !ids.insert(id) {
                        return Err(ProvisionError::ValidationError(format!(
                            "jbod volume id {} is used more than once",
                            id
                        )));
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SingleVolumeStorageType {
    Ephemeral,
    PersistentClaim,
}

/// Storage backed by a single volume, used by ZooKeeper and by JBOD volumes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SingleVolumeStorage {
    #[serde(rename = "type")]
    pub storage_type: SingleVolumeStorageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_claim: Option<bool>,
    /// Volume id, only meaningful inside a `jbod` storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl SingleVolumeStorage {
    pub fn validate(&self) -> Result<()> {
        match self.storage_type {
            SingleVolumeStorageType::Ephemeral => Ok(()),
            SingleVolumeStorageType::PersistentClaim => require_size(&self.size),
        }
    }
}

fn require_size(size: &Option<String>) -> Result<()> {
    match size.as_deref() {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(ProvisionError::ValidationError(
            "persistent-claim storage requires a size".to_string(),
        )),
    }
}

/// Listeners of the brokers. The listener bodies are passed to the
/// operator as-is.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Listeners {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plain: Option<OpenRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<OpenRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<OpenRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JmxOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<OpenRecord>,
}

/// Rack awareness: the node label used as broker rack id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rack {
    pub topology_key: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ZookeeperClusterSpec {
    /// The number of ZooKeeper pods
    pub replicas: i32,
    /// Storage configuration (disk). Cannot be updated.
    pub storage: SingleVolumeStorage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ConfigMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jvm_options: Option<JvmOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<OpenRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_sidecar: Option<Sidecar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<OpenRecord>,
}

/// Topic and user management add-ons deployed next to the cluster.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityOperatorSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_operator: Option<EntityTopicOperatorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_operator: Option<EntityUserOperatorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_sidecar: Option<Sidecar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<OpenRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityTopicOperatorSpec {
    /// Namespace to watch, defaults to the cluster's namespace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciliation_interval_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zookeeper_session_timeout_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_metadata_max_attempts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jvm_options: Option<JvmOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityUserOperatorSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciliation_interval_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zookeeper_session_timeout_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jvm_options: Option<JvmOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<Logging>,
}

/// Prometheus exporter for consumer lag and topic metrics.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KafkaExporterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Consumer groups to collect, as a regular expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_regex: Option<String>,
    /// Topics to collect, as a regular expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// Exporter log level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sarama_logging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<OpenRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAuthority {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_certificate_authority: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_days: Option<i32>,
    /// `renew-certificate` or `replace-key`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_expiration_policy: Option<String>,
}

impl KafkaSpec {
    /// Check the cross-field rules the operator enforces on admission.
    pub fn validate(&self) -> Result<()> {
        require_positive("kafka.replicas", self.kafka.replicas)?;
        self.kafka.storage.validate()?;
        require_positive("zookeeper.replicas", self.zookeeper.replicas)?;
        self.zookeeper.storage.validate()?;
        if let Some(ca) = self.cluster_ca.iter().chain(self.clients_ca.iter()).find(|ca| {
            matches!((ca.validity_days, ca.renewal_days), (Some(v), Some(r)) if r >= v)
        }) {
            return Err(ProvisionError::ValidationError(format!(
                "certificate renewal period ({} days) must be shorter than its validity",
                ca.renewal_days.unwrap_or_default()
            )));
        }
        Ok(())
    }
}

pub(crate) fn require_positive(field: &str, value: i32) -> Result<()> {
    if value < 1 {
        return Err(ProvisionError::ValidationError(format!(
            "{} must be at least 1, got {}",
            field, value
        )));
    }
    Ok(())
}
