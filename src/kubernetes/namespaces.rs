// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::error::{ProvisionError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use tracing::{debug, info, instrument};

/// Ensure a namespace exists in the cluster, create if it doesn't
#[instrument(skip(client))]
pub async fn ensure_namespace_exists(client: &Client, namespace: &str) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.get(namespace).await {
        Ok(_) => {
            debug!("Namespace {} already exists", namespace);
            Ok(())
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating namespace {}", namespace);
            let ns = Namespace {
                metadata: ObjectMeta {
                    name: Some(namespace.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            };
            namespaces.create(&PostParams::default(), &ns).await?;
            info!("Namespace {} created", namespace);
            Ok(())
        }
        Err(e) => Err(ProvisionError::NamespaceError(format!(
            "Failed to check/create namespace {}: {}",
            namespace, e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{namespace_json, not_found_json, MockService};

    #[tokio::test]
    async fn test_existing_namespace_is_left_alone() {
        let service =
            MockService::new().on_get("/api/v1/namespaces/kafka", 200, &namespace_json("kafka"));
        let client = service.clone().into_client();

        ensure_namespace_exists(&client, "kafka").await.unwrap();

        let requests = service.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
    }

    #[tokio::test]
    async fn test_missing_namespace_is_created() {
        let service = MockService::new()
            .on_get(
                "/api/v1/namespaces/kafka",
                404,
                &not_found_json("namespaces", "kafka"),
            )
            .on_post("/api/v1/namespaces", 201, &namespace_json("kafka"));
        let client = service.clone().into_client();

        ensure_namespace_exists(&client, "kafka").await.unwrap();

        let requests = service.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, "POST");
        let body: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
        assert_eq!(body["metadata"]["name"], "kafka");
    }

    #[tokio::test]
    async fn test_other_errors_are_reported() {
        let service = MockService::new().on_get(
            "/api/v1/namespaces/kafka",
            500,
            r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"boom","reason":"InternalError","code":500}"#,
        );
        let client = service.into_client();

        let err = ensure_namespace_exists(&client, "kafka").await.unwrap_err();
        assert!(matches!(err, ProvisionError::NamespaceError(_)));
    }
}
