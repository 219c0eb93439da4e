// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kubetmpl::cli::Args;
use kubetmpl::config::Config;
use kubetmpl::kubernetes::{create_client, resolve};
use kubetmpl::run::render_ingresses;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = match Args::try_parse_compat(std::env::args_os()) {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            e.print().ok();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };
    let config = Config::from_args(args);

    // Logs go to stderr; stdout carries only the rendered template
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let credentials = resolve(&config.kubeconfig, config.context.as_deref()).await?;
    let client = create_client(credentials)?;
    info!("Connected to Kubernetes cluster");

    let stdout = std::io::stdout();
    render_ingresses(&client, &config, stdout.lock()).await?;
    Ok(())
}
