// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Records shared by several Strimzi resource kinds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An open, schema-less record. Used wherever the Strimzi shape is not
/// modelled field by field (listener details, tracing, pod templates,
/// JMX authentication and friends).
pub type OpenRecord = BTreeMap<String, serde_json::Value>;

/// Free-form configuration map as passed to Kafka brokers, topics and connectors.
pub type ConfigMap = BTreeMap<String, AttributeValue>;

/// A single configuration value: string, number or boolean.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    /// Integers beyond `i64::MAX`
    UInt(u64),
    Float(f64),
    String(String),
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::String(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::String(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<u64> for AttributeValue {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or(AttributeValue::UInt(v), AttributeValue::Int)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

/// JVM flags for a Java based component.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JvmOptions {
    /// `-Xmx` option to the JVM
    #[serde(rename = "-Xmx", skip_serializing_if = "Option::is_none")]
    pub xmx: Option<String>,
    /// `-Xms` option to the JVM
    #[serde(rename = "-Xms", skip_serializing_if = "Option::is_none")]
    pub xms: Option<String>,
    /// `-XX` options, keyed without the `-XX:` prefix
    #[serde(rename = "-XX", skip_serializing_if = "Option::is_none")]
    pub xx: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_logging_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_system_properties: Option<Vec<SystemProperty>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
pub struct SystemProperty {
    pub name: String,
    pub value: String,
}

/// Liveness or readiness probe timings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Probe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_delay_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_threshold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<i32>,
}

/// Logging configuration, either inline loggers or an external ConfigMap.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Logging {
    Inline {
        #[serde(skip_serializing_if = "Option::is_none")]
        loggers: Option<BTreeMap<String, String>>,
    },
    External {
        name: String,
    },
}

/// A sidecar container running next to a Strimzi component.
///
/// The base fields apply to every sidecar; the TLS sidecars additionally
/// accept the fields of [`SidecarExtension`], which are flattened into the
/// same object on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sidecar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<k8s_openapi::api::core::v1::ResourceRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
    #[serde(flatten)]
    pub extension: SidecarExtension,
}

/// Fields only the TLS sidecars understand.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SidecarExtension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<TlsSidecarLogLevel>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TlsSidecarLogLevel {
    Emerg,
    Alert,
    Crit,
    Err,
    Warning,
    Notice,
    Info,
    Debug,
}

/// Reference to a certificate stored in a Secret.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertSecretSource {
    pub secret_name: String,
    pub certificate: String,
}

/// Reference to a certificate and its private key stored in a Secret.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertAndKeySecretSource {
    pub secret_name: String,
    pub certificate: String,
    pub key: String,
}

/// Reference to a password stored in a Secret.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSecretSource {
    pub secret_name: String,
    pub password: String,
}

/// Reference to an arbitrary key of a Secret.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenericSecretSource {
    pub secret_name: String,
    pub key: String,
}
