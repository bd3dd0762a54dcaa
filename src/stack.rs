// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Declarative description of a whole Strimzi deployment: the operator
//! release plus the Kafka resources to create once it runs.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, instrument};

use crate::constants::operator::{CHART, REPO};
use crate::error::{ProvisionError, Result};
use crate::provision::{ChartHandle, ChartInstaller, ResourceHandle, ResourceProvisioner};
use crate::resources::{
    create_kafka, create_kafka_connect, create_kafka_connector, create_kafka_topic,
    install_kafka_operator, KafkaClusterArgs, KafkaConnectArgs, KafkaConnectorArgs,
    KafkaOperatorArgs, KafkaTopicArgs, ResourceOptions,
};
use crate::types::HelmOptions;

/// A resource entry: its name next to the constructor arguments.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Named<A> {
    pub name: String,
    #[serde(flatten)]
    pub args: A,
}

/// The operator Helm release. `repo` and `chart` default to the upstream
/// Strimzi chart.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperatorRelease {
    pub name: String,
    /// Chart version. Quote it in YAML (`version: "0.17"`); an unquoted
    /// `0.17` is a YAML float, not a string.
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,
    /// Defaults to the stack namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<serde_json::Value>,
}

impl OperatorRelease {
    fn args(&self, default_namespace: Option<&str>) -> KafkaOperatorArgs {
        KafkaOperatorArgs::from(HelmOptions {
            repo: self.repo.clone().unwrap_or_else(|| REPO.to_string()),
            chart: self.chart.clone().unwrap_or_else(|| CHART.to_string()),
            version: self.version.clone(),
            namespace: self
                .namespace
                .clone()
                .or_else(|| default_namespace.map(str::to_string)),
            values: self.values.clone(),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    /// Namespace for every resource whose metadata names none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<OperatorRelease>,
    #[serde(default)]
    pub clusters: Vec<Named<KafkaClusterArgs>>,
    #[serde(default)]
    pub connects: Vec<Named<KafkaConnectArgs>>,
    #[serde(default)]
    pub topics: Vec<Named<KafkaTopicArgs>>,
    #[serde(default)]
    pub connectors: Vec<Named<KafkaConnectorArgs>>,
}

/// What a deployment created, in creation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeploymentReport {
    pub operator: Option<ChartHandle>,
    pub resources: Vec<ResourceHandle>,
}

impl Stack {
    pub fn from_yaml_str(manifest: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(manifest)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let manifest = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&manifest)
    }

    /// Run every cross-field check, including that topics and connectors
    /// point at a cluster declared in the same stack. References are only
    /// checked when the stack declares clusters (or connects) at all.
    pub fn validate(&self) -> Result<()> {
        let clusters = unique_names("cluster", &self.clusters)?;
        let connects = unique_names("connect", &self.connects)?;
        unique_names("topic", &self.topics)?;
        unique_names("connector", &self.connectors)?;

        for cluster in &self.clusters {
            cluster.args.spec.validate().map_err(|e| context(&cluster.name, e))?;
        }
        for connect in &self.connects {
            connect.args.spec.validate().map_err(|e| context(&connect.name, e))?;
        }
        for topic in &self.topics {
            topic.args.spec.validate().map_err(|e| context(&topic.name, e))?;
            check_reference("topic", &topic.name, &topic.args.cluster, &clusters)?;
        }
        for connector in &self.connectors {
            connector
                .args
                .spec
                .validate()
                .map_err(|e| context(&connector.name, e))?;
            check_reference("connector", &connector.name, &connector.args.cluster, &connects)?;
        }
        Ok(())
    }

    pub fn resource_options(&self, dry_run: bool, field_manager: Option<String>) -> ResourceOptions {
        ResourceOptions {
            namespace: self.namespace.clone(),
            dry_run,
            field_manager,
        }
    }

    /// Install the operator chart, if the stack declares one.
    #[instrument(skip_all)]
    pub async fn install_operator<I: ChartInstaller>(
        &self,
        installer: &I,
    ) -> Result<Option<ChartHandle>> {
        let Some(operator) = &self.operator else {
            return Ok(None);
        };
        let args = operator.args(self.namespace.as_deref());
        let handle = install_kafka_operator(installer, &operator.name, args).await?;
        Ok(Some(handle))
    }

    /// Create clusters, connects, topics and connectors, in that order.
    /// The first failure aborts the remaining requests.
    #[instrument(skip_all)]
    pub async fn apply_resources<P: ResourceProvisioner>(
        &self,
        provisioner: &P,
        opts: &ResourceOptions,
    ) -> Result<Vec<ResourceHandle>> {
        let mut handles = Vec::new();

        for cluster in &self.clusters {
            handles.push(create_kafka(provisioner, &cluster.name, cluster.args.clone(), opts).await?);
        }
        for connect in &self.connects {
            handles.push(
                create_kafka_connect(provisioner, &connect.name, connect.args.clone(), opts).await?,
            );
        }
        for topic in &self.topics {
            handles.push(create_kafka_topic(provisioner, &topic.name, topic.args.clone(), opts).await?);
        }
        for connector in &self.connectors {
            handles.push(
                create_kafka_connector(provisioner, &connector.name, connector.args.clone(), opts)
                    .await?,
            );
        }

        info!("Requested {} custom resources", handles.len());
        Ok(handles)
    }

    /// Install the operator and create every resource without waiting in between.
    pub async fn deploy<I, P>(
        &self,
        installer: &I,
        provisioner: &P,
        opts: &ResourceOptions,
    ) -> Result<DeploymentReport>
    where
        I: ChartInstaller,
        P: ResourceProvisioner,
    {
        let operator = self.install_operator(installer).await?;
        let resources = self.apply_resources(provisioner, opts).await?;
        Ok(DeploymentReport { operator, resources })
    }
}

fn unique_names<'a, A>(kind: &str, entries: &'a [Named<A>]) -> Result<HashSet<&'a str>> {
    let mut names = HashSet::new();
    for entry in entries {
        if !names.insert(entry.name.as_str()) {
            return Err(ProvisionError::ValidationError(format!(
                "{} {} is declared more than once",
                kind, entry.name
            )));
        }
    }
    Ok(names)
}

fn check_reference(kind: &str, name: &str, target: &str, declared: &HashSet<&str>) -> Result<()> {
    if !declared.is_empty() && !declared.contains(target) {
        return Err(ProvisionError::ValidationError(format!(
            "{} {} references undeclared cluster {}",
            kind, name, target
        )));
    }
    Ok(())
}

fn context(name: &str, err: ProvisionError) -> ProvisionError {
    match err {
        ProvisionError::ValidationError(msg) => {
            ProvisionError::ValidationError(format!("{}: {}", name, msg))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::labels;
    use crate::provision::recording::RecordedRequest;
    use crate::provision::RecordingProvisioner;

    const MANIFEST: &str = r#"
namespace: kafka
operator:
  name: strimzi
  version: 0.17.0
  values:
    watchAnyNamespace: true
clusters:
  - name: prod-kafka
    spec:
      kafka:
        replicas: 3
        storage:
          type: persistent-claim
          size: 100Gi
        listeners:
          plain: {}
          tls: {}
        config:
          offsets.topic.replication.factor: 3
          auto.create.topics.enable: false
      zookeeper:
        replicas: 3
        storage:
          type: persistent-claim
          size: 10Gi
      entityOperator:
        topicOperator: {}
        userOperator: {}
connects:
  - name: connect
    metadata:
      annotations:
        strimzi.io/use-connector-resources: "true"
    spec:
      bootstrapServers: prod-kafka-kafka-bootstrap:9092
      replicas: 1
topics:
  - name: orders
    cluster: prod-kafka
    spec:
      partitions: 6
      replicas: 3
      config:
        retention.ms: 604800000
connectors:
  - name: file-source
    cluster: connect
    spec:
      class: org.apache.kafka.connect.file.FileStreamSourceConnector
      tasksMax: 1
      config:
        file: /opt/kafka/LICENSE
        topic: orders
"#;

    #[test]
    fn test_manifest_parses_and_validates() {
        let stack = Stack::from_yaml_str(MANIFEST).unwrap();

        assert_eq!(stack.namespace.as_deref(), Some("kafka"));
        assert_eq!(stack.clusters.len(), 1);
        assert_eq!(stack.clusters[0].args.spec.kafka.replicas, 3);
        assert_eq!(stack.topics[0].args.cluster, "prod-kafka");
        assert_eq!(stack.connectors[0].args.spec.tasks_max, 1);
        stack.validate().unwrap();
    }

    #[test]
    fn test_manifest_missing_required_field_is_rejected() {
        let manifest = r#"
topics:
  - name: orders
    cluster: prod-kafka
    spec:
      replicas: 3
"#;
        assert!(matches!(
            Stack::from_yaml_str(manifest),
            Err(ProvisionError::ManifestError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_cluster_reference() {
        let mut stack = Stack::from_yaml_str(MANIFEST).unwrap();
        stack.topics[0].args.cluster = "staging-kafka".to_string();

        let err = stack.validate().unwrap_err();
        assert!(err.to_string().contains("staging-kafka"), "{}", err);
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let mut stack = Stack::from_yaml_str(MANIFEST).unwrap();
        stack.topics.push(stack.topics[0].clone());
        assert!(stack.validate().is_err());
    }

    #[test]
    fn test_validate_prefixes_errors_with_resource_name() {
        let mut stack = Stack::from_yaml_str(MANIFEST).unwrap();
        stack.topics[0].args.spec.partitions = 0;

        let err = stack.validate().unwrap_err();
        assert!(err.to_string().contains("orders: partitions"), "{}", err);
    }

    #[test]
    fn test_operator_defaults_to_stack_namespace_and_strimzi_chart() {
        let stack = Stack::from_yaml_str(MANIFEST).unwrap();
        let args = stack.operator.as_ref().unwrap().args(stack.namespace.as_deref());

        assert_eq!(args.helm.repo, "strimzi");
        assert_eq!(args.helm.chart, "strimzi-kafka-operator");
        assert_eq!(args.helm.namespace.as_deref(), Some("kafka"));
    }

    #[test]
    fn test_operator_version_is_never_reformatted() {
        let quoted = Stack::from_yaml_str("operator:\n  name: strimzi\n  version: \"0.17\"\n")
            .unwrap();
        assert_eq!(quoted.operator.unwrap().version, "0.17");

        match Stack::from_yaml_str("operator:\n  name: strimzi\n  version: 0.17\n") {
            Ok(stack) => assert_eq!(stack.operator.unwrap().version, "0.17"),
            Err(err) => assert!(matches!(err, ProvisionError::ManifestError(_)), "{}", err),
        }
    }

    #[test]
    fn test_operator_repo_override_keeps_default_chart() {
        let release = OperatorRelease {
            name: "strimzi".to_string(),
            version: "0.17.0".to_string(),
            repo: Some("https://strimzi.io/charts/".to_string()),
            chart: None,
            namespace: Some("operators".to_string()),
            values: None,
        };

        let args = release.args(Some("kafka"));
        assert_eq!(args.helm.repo, "https://strimzi.io/charts/");
        assert_eq!(args.helm.chart, "strimzi-kafka-operator");
        assert_eq!(args.helm.namespace.as_deref(), Some("operators"));
    }

    #[tokio::test]
    async fn test_deploy_issues_requests_in_dependency_order() {
        let stack = Stack::from_yaml_str(MANIFEST).unwrap();
        let recorder = RecordingProvisioner::new();
        let opts = stack.resource_options(false, None);

        let report = stack.deploy(&recorder, &recorder, &opts).await.unwrap();

        assert_eq!(report.operator.as_ref().map(|h| h.release.as_str()), Some("strimzi"));
        let kinds: Vec<&str> = report.resources.iter().map(|h| h.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Kafka", "KafkaConnect", "KafkaTopic", "KafkaConnector"]);
        assert!(report
            .resources
            .iter()
            .all(|h| h.namespace.as_deref() == Some("kafka")));

        let requests = recorder.requests();
        assert!(matches!(requests[0], RecordedRequest::Chart(_)));
        assert_eq!(requests.len(), 5);

        let connector = &recorder.resource_requests()[3];
        assert_eq!(
            connector.object.metadata.labels.as_ref().unwrap()[labels::CLUSTER],
            "connect"
        );
    }

    #[tokio::test]
    async fn test_stack_without_operator_only_creates_resources() {
        let mut stack = Stack::from_yaml_str(MANIFEST).unwrap();
        stack.operator = None;
        let recorder = RecordingProvisioner::new();

        let report = stack
            .deploy(&recorder, &recorder, &ResourceOptions::default())
            .await
            .unwrap();

        assert!(report.operator.is_none());
        assert!(recorder.chart_requests().is_empty());
        assert_eq!(report.resources.len(), 4);
    }
}
