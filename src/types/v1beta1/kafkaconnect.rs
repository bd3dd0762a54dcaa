// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::core::v1::{Affinity, ResourceRequirements, Toleration};
use kube::CustomResource;
use serde::{Deserialize, Serialize};

use crate::error::{ProvisionError, Result};
use crate::types::common::{
    CertAndKeySecretSource, CertSecretSource, ConfigMap, GenericSecretSource, JvmOptions,
    Logging, OpenRecord, PasswordSecretSource, Probe,
};
use crate::types::v1beta1::kafka::require_positive;

/// A Kafka Connect cluster attached to a Kafka cluster.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[kube(group = "kafka.strimzi.io", version = "v1beta1", kind = "KafkaConnect")]
#[kube(namespaced)]
#[kube(derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
pub struct KafkaConnectSpec {
    /// Bootstrap servers to connect to, as a comma separated list of `host:port`
    pub bootstrap_servers: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<ClientTls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<KafkaClientAuthentication>,
    /// Connect worker configuration
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
    pub tracing: Option<OpenRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<OpenRecord>,
    /// Secrets and ConfigMaps exposed to the workers as env vars or volumes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_configuration: Option<OpenRecord>,
}

/// Certificates trusted when connecting to the brokers over TLS.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientTls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_certificates: Option<Vec<CertSecretSource>>,
}

/// How a client authenticates against the brokers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(tag = "type")]
pub enum KafkaClientAuthentication {
    /// TLS client certificate
    #[serde(rename = "tls", rename_all = "camelCase")]
    Tls {
        certificate_and_key: CertAndKeySecretSource,
    },
    /// SASL SCRAM-SHA-512
    #[serde(rename = "scram-sha-512", rename_all = "camelCase")]
    ScramSha512 {
        username: String,
        password_secret: PasswordSecretSource,
    },
    /// SASL PLAIN
    #[serde(rename = "plain", rename_all = "camelCase")]
    Plain {
        username: String,
        password_secret: PasswordSecretSource,
    },
    /// SASL OAUTHBEARER
    #[serde(rename = "oauth", rename_all = "camelCase")]
    OAuth {
        #[serde(skip_serializing_if = "Option::is_none")]
        client_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        token_endpoint_uri: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        client_secret: Option<GenericSecretSource>,
        #[serde(skip_serializing_if = "Option::is_none")]
        access_token: Option<GenericSecretSource>,
        #[serde(skip_serializing_if = "Option::is_none")]
        refresh_token: Option<GenericSecretSource>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tls_trusted_certificates: Option<Vec<CertSecretSource>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        disable_tls_hostname_verification: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_token_expiry_seconds: Option<i32>,
    },
}

impl KafkaConnectSpec {
    pub fn validate(&self) -> Result<()> {
        if self.bootstrap_servers.trim().is_empty() {
            return Err(ProvisionError::ValidationError(
                "bootstrapServers must not be empty".to_string(),
            ));
        }
        if let Some(replicas) = self.replicas {
            require_positive("replicas", replicas)?;
        }
        if let Some(KafkaClientAuthentication::OAuth {
            client_id,
            token_endpoint_uri,
            access_token,
            ..
        }) = &self.authentication
        {
            let has_client = client_id.is_some() && token_endpoint_uri.is_some();
            if !has_client && access_token.is_none() {
                return Err(ProvisionError::ValidationError(
                    "oauth authentication needs clientId and tokenEndpointUri, or an accessToken"
                        .to_string(),
                ));
            }
        }
        Ok(())
    }
}
