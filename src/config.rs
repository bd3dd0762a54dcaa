// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{crd::DEFAULT_WAIT_TIMEOUT_SECS, FIELD_MANAGER};

/// Deployment configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the stack manifest to deploy
    pub stack_file: PathBuf,
    /// Render the requests as YAML instead of sending them
    pub dry_run: bool,
    pub skip_validation: bool,
    pub helm_binary: String,
    /// Kubeconfig context to use instead of the current one
    pub kube_context: Option<String>,
    pub field_manager: String,
    /// How long to wait for the Strimzi CRDs after installing the operator, zero disables waiting
    pub crd_wait_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let stack_file: PathBuf = env::var("STACK_FILE")
            .context("STACK_FILE environment variable not set")?
            .into();
        let dry_run = parse_flag("DRY_RUN")?;
        let skip_validation = parse_flag("SKIP_VALIDATION")?;
        let helm_binary = env::var("HELM_BINARY").unwrap_or_else(|_| "helm".to_string());
        let kube_context = env::var("KUBE_CONTEXT").ok().filter(|c| !c.is_empty());
        let field_manager =
            env::var("FIELD_MANAGER").unwrap_or_else(|_| FIELD_MANAGER.to_string());
        let crd_wait_timeout = match env::var("CRD_WAIT_TIMEOUT_SECS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("CRD_WAIT_TIMEOUT_SECS is not a number: {}", v))?,
            Err(_) => DEFAULT_WAIT_TIMEOUT_SECS,
        };

        Ok(Config {
            stack_file,
            dry_run,
            skip_validation,
            helm_binary,
            kube_context,
            field_manager,
            crd_wait_timeout: Duration::from_secs(crd_wait_timeout),
        })
    }
}

fn parse_flag(name: &str) -> Result<bool> {
    match env::var(name) {
        Ok(v) => v
            .parse()
            .with_context(|| format!("{} must be 'true' or 'false', got '{}'", name, v)),
        Err(_) => Ok(false),
    }
}
