// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use tracing::instrument;

use crate::constants::operator::{CHART, REPO};
use crate::error::Result;
use crate::provision::{ChartHandle, ChartInstallRequest, ChartInstaller};
use crate::types::HelmOptions;

/// Chart options for the Strimzi operator.
#[derive(Clone, Debug, PartialEq)]
pub struct KafkaOperatorArgs {
    pub helm: HelmOptions,
}

impl KafkaOperatorArgs {
    /// The upstream `strimzi/strimzi-kafka-operator` chart at `version`.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            helm: HelmOptions {
                repo: REPO.to_string(),
                chart: CHART.to_string(),
                version: version.into(),
                namespace: None,
                values: None,
            },
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.helm.namespace = Some(namespace.into());
        self
    }

    pub fn values(mut self, values: serde_json::Value) -> Self {
        self.helm.values = Some(values);
        self
    }
}

impl From<HelmOptions> for KafkaOperatorArgs {
    fn from(helm: HelmOptions) -> Self {
        Self { helm }
    }
}

/// The chart install request for an operator release named `name`.
pub fn operator_chart_request(name: &str, args: KafkaOperatorArgs) -> ChartInstallRequest {
    let HelmOptions {
        repo,
        chart,
        version,
        namespace,
        values,
    } = args.helm;
    ChartInstallRequest {
        release: name.to_string(),
        repo,
        chart,
        version,
        namespace,
        values,
    }
}

#[instrument(skip(installer, args))]
pub async fn install_kafka_operator<I: ChartInstaller>(
    installer: &I,
    name: &str,
    args: KafkaOperatorArgs,
) -> Result<ChartHandle> {
    installer
        .install_chart(operator_chart_request(name, args))
        .await
}
