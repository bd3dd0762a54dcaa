// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation, CRD discovery, and namespace management.

pub mod client;
pub mod crd;
pub mod namespaces;

pub use client::create_client;
pub use crd::wait_for_strimzi_crds;
pub use namespaces::ensure_namespace_exists;
