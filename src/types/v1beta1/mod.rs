// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! `kafka.strimzi.io/v1beta1` resources.

pub mod kafka;
pub mod kafkaconnect;
pub mod kafkatopic;

pub use kafka::{Kafka, KafkaSpec};
pub use kafkaconnect::{KafkaConnect, KafkaConnectSpec};
pub use kafkatopic::{KafkaTopic, KafkaTopicSpec};
