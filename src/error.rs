// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to serialize resource: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse manifest: {0}")]
    ManifestError(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to create client: {0}")]
    KubeconfigError(String),

    #[error("Chart installation failed: {0}")]
    ChartInstallError(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Strimzi CRDs not available: {0}")]
    CrdUnavailable(String),

    #[error("Namespace creation failed: {0}")]
    NamespaceError(String),
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
