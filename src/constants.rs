// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API group served by the Strimzi operator
pub const STRIMZI_GROUP: &str = "kafka.strimzi.io";

/// Label keys understood by the Strimzi operator
pub mod labels {
    /// Associates a topic, user or connector with its parent cluster
    pub const CLUSTER: &str = "strimzi.io/cluster";
}

/// Defaults for the operator Helm chart
pub mod operator {
    /// Repository alias the chart is installed from
    pub const REPO: &str = "strimzi";
    /// Chart name of the Strimzi operator
    pub const CHART: &str = "strimzi-kafka-operator";
}

/// The field manager recorded on created resources
pub const FIELD_MANAGER: &str = "strimzi-deploy";

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
    /// Default time to wait for the operator to register its CRDs
    pub const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 300;
}
