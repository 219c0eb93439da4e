// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::Args;
use crate::constants::KUBECONFIG_HOME_PATH;
use std::path::PathBuf;

/// Run configuration assembled from command line arguments
#[derive(Debug, Clone)]
pub struct Config {
    /// Template file to render
    pub template: PathBuf,
    /// Kubeconfig used when no in-cluster service account is available
    pub kubeconfig: PathBuf,
    pub context: Option<String>,
    /// Namespace to list ingresses from; empty means all namespaces
    pub namespace: String,
    pub selector: Option<String>,
    pub verbosity: u8,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Config {
            template: args.template,
            kubeconfig: args.kubeconfig,
            context: args.context,
            namespace: args.namespace,
            selector: args.selector,
            verbosity: args.verbose,
        }
    }

    /// Default tracing filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// `$HOME/.kube/config`
pub fn default_kubeconfig() -> PathBuf {
    KUBECONFIG_HOME_PATH
        .iter()
        .fold(dirs::home_dir().unwrap_or_default(), |path, part| path.join(part))
}
