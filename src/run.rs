// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! List ingresses once and render them through the configured template.

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::list_ingresses;
use crate::template::{RenderInput, Renderer};
use kube::Client;
use std::io::Write;
use tracing::{info, instrument};

/// Fetch the ingress snapshot, then render it into `out`.
///
/// The list call happens exactly once and completes before the template is
/// read, so the output reflects a single point in time.
#[instrument(skip_all, fields(namespace = %config.namespace, template = %config.template.display()))]
pub async fn render_ingresses<W: Write>(client: &Client, config: &Config, out: W) -> Result<()> {
    let ingress = list_ingresses(client, &config.namespace, config.selector.as_deref()).await?;
    info!("Listed {} ingress(es)", ingress.len());

    let input = RenderInput { ingress };
    let renderer = Renderer::from_file(&config.template)?;
    renderer.render(&input, out)
}
