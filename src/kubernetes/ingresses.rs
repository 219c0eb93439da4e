// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation and ingress listing

use crate::error::{KubetmplError, Result};
use crate::kubernetes::Credentials;
use k8s_openapi::api::networking::v1::Ingress;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// Create a Kubernetes client from resolved credentials
pub fn create_client(credentials: Credentials) -> Result<Client> {
    Client::try_from(credentials.config).map_err(KubetmplError::Client)
}

/// List every ingress in `namespace` with a single request.
///
/// An empty namespace lists across all namespaces. Items keep the order
/// returned by the API server.
#[instrument(skip(client))]
pub async fn list_ingresses(
    client: &Client,
    namespace: &str,
    selector: Option<&str>,
) -> Result<Vec<Ingress>> {
    let ingresses: Api<Ingress> = if namespace.is_empty() {
        Api::all(client.clone())
    } else {
        Api::namespaced(client.clone(), namespace)
    };

    let mut lp = ListParams::default();
    if let Some(selector) = selector {
        lp = lp.labels(selector);
    }

    let ingress_list = ingresses
        .list(&lp)
        .await
        .map_err(KubetmplError::ListIngresses)?;

    debug!("Discovered {} ingress(es)", ingress_list.items.len());
    Ok(ingress_list.items)
}
