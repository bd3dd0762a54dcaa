// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed schemas of the Strimzi custom resources and the operator chart.

pub mod common;
pub mod helm;
pub mod v1alpha1;
pub mod v1beta1;

pub use helm::HelmOptions;
