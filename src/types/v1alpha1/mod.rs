// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `kafka.strimzi.io/v1alpha1` resources.

pub mod kafkaconnector;

pub use kafkaconnector::{KafkaConnector, KafkaConnectorSpec};
