// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Credential resolution: in-cluster service account first, kubeconfig file second.

use crate::error::{KubetmplError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig, KubeconfigError};
use kube::Config as KConfig;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where a resolved client configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    InCluster,
    Kubeconfig(PathBuf),
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::InCluster => write!(f, "in-cluster service account"),
            CredentialSource::Kubeconfig(path) => write!(f, "kubeconfig {}", path.display()),
        }
    }
}

/// A client configuration tagged with the strategy that produced it
#[derive(Debug, Clone)]
pub struct Credentials {
    pub config: KConfig,
    pub source: CredentialSource,
}

/// Resolve credentials for the cluster.
///
/// The in-cluster service account takes priority. When it is unavailable the
/// kubeconfig at `kubeconfig` is used, optionally pinned to `context`. If
/// both fail, the kubeconfig error is returned.
#[instrument(skip_all, fields(kubeconfig = %kubeconfig.display()))]
pub async fn resolve(kubeconfig: &Path, context: Option<&str>) -> Result<Credentials> {
    let credentials = resolve_with(KConfig::incluster, || {
        load_kubeconfig(kubeconfig, context)
    })
    .await
    .map_err(KubetmplError::Credentials)?;

    info!("Using credentials from {}", credentials.source);
    Ok(credentials)
}

/// Two-stage resolution over injectable strategies.
///
/// `from_file` only runs when `in_cluster` fails, and its error wins.
pub async fn resolve_with<E1, E2, F, Fut>(
    in_cluster: impl FnOnce() -> std::result::Result<KConfig, E1>,
    from_file: F,
) -> std::result::Result<Credentials, E2>
where
    E1: fmt::Display,
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<(KConfig, PathBuf), E2>>,
{
    match in_cluster() {
        Ok(config) => Ok(Credentials {
            config,
            source: CredentialSource::InCluster,
        }),
        Err(e) => {
            debug!("In-cluster config unavailable: {}", e);
            let (config, path) = from_file().await?;
            Ok(Credentials {
                config,
                source: CredentialSource::Kubeconfig(path),
            })
        }
    }
}

/// Build a client config from a kubeconfig file on disk
async fn load_kubeconfig(
    path: &Path,
    context: Option<&str>,
) -> std::result::Result<(KConfig, PathBuf), KubeconfigError> {
    let kubeconfig = Kubeconfig::read_from(path)?;
    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    let config = KConfig::from_custom_kubeconfig(kubeconfig, &options).await?;
    Ok((config, path.to_path_buf()))
}
