// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod provision;
pub mod resources;
pub mod stack;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use error::{ProvisionError, Result};
pub use provision::{
    ChartHandle, ChartInstallRequest, ChartInstaller, CustomResourceRequest, ResourceHandle,
    ResourceProvisioner,
};
pub use resources::*;
pub use types::v1alpha1::{KafkaConnector, KafkaConnectorSpec};
pub use types::v1beta1::{Kafka, KafkaConnect, KafkaConnectSpec, KafkaSpec, KafkaTopic, KafkaTopicSpec};
pub use types::HelmOptions;
