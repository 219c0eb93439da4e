// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Each message already carries the underlying error, so no
/// variant exposes it again as a source.
#[derive(Error, Debug)]
pub enum KubetmplError {
    #[error("Loading kubernetes config: {0}")]
    Credentials(kube::config::KubeconfigError),

    #[error("Creating kubernetes client: {0}")]
    Client(kube::Error),

    #[error("Listing ingresses: {0}")]
    ListIngresses(kube::Error),

    #[error("Reading template from {path:?}: {error}")]
    ReadTemplate {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Parsing template from {path:?}: {error}")]
    ParseTemplate {
        path: PathBuf,
        error: minijinja::Error,
    },

    #[error("Executing template: {0}")]
    RenderTemplate(minijinja::Error),
}

pub type Result<T> = std::result::Result<T, KubetmplError>;
