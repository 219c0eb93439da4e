// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::config::default_kubeconfig;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Long options that may also be spelled with a single dash, as in `-kubeconfig`
const SINGLE_DASH_LONGS: [&str; 4] = ["kubeconfig", "context", "namespace", "selector"];

/// Render Kubernetes ingresses through a template
#[derive(Debug, Parser)]
#[command(name = "kubetmpl", version)]
pub struct Args {
    /// Template file to render
    #[arg(value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Path to kubeconfig file
    #[arg(long, value_name = "PATH", default_value_os_t = default_kubeconfig())]
    pub kubeconfig: PathBuf,

    /// Kubeconfig context to use instead of the current one
    #[arg(long)]
    pub context: Option<String>,

    /// Namespace to read data from (empty for all namespaces)
    #[arg(short = 'n', long, default_value = "")]
    pub namespace: String,

    /// Only list ingresses matching this label selector
    #[arg(short = 'l', long)]
    pub selector: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse arguments, accepting `-kubeconfig` style long options next to `--kubeconfig`
    pub fn try_parse_compat<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_single_dash(args))
    }
}

/// Rewrite `-name` and `-name=value` to `--name` for the known long options.
/// Arguments after a bare `--` are left alone.
fn normalize_single_dash<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if positional_only {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                positional_only = true;
                return arg;
            }
            let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if SINGLE_DASH_LONGS.contains(&name) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}
