// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Template environment setup and rendering.

pub mod functions;

use crate::constants::TEMPLATE_NAME;
use crate::error::{KubetmplError, Result};
use k8s_openapi::api::networking::v1::Ingress;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The single value bound to the template
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderInput {
    #[serde(rename = "Ingress")]
    pub ingress: Vec<Ingress>,
}

/// Build an environment with the contrib helpers and the custom helpers registered
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
    minijinja_contrib::add_to_environment(&mut env);
    env.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
    functions::register(&mut env);
    env
}

/// A parsed template ready to render once
pub struct Renderer {
    env: Environment<'static>,
    path: PathBuf,
}

impl Renderer {
    /// Read and parse the template at `path`
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|error| KubetmplError::ReadTemplate {
            path: path.to_path_buf(),
            error,
        })?;
        Self::from_source(path, source)
    }

    /// Parse `source`, attributing errors to `path`
    pub fn from_source(path: &Path, source: String) -> Result<Self> {
        let mut env = environment();
        env.add_template_owned(TEMPLATE_NAME, source)
            .map_err(|error| KubetmplError::ParseTemplate {
                path: path.to_path_buf(),
                error,
            })?;

        debug!("Parsed template {}", path.display());
        Ok(Renderer {
            env,
            path: path.to_path_buf(),
        })
    }

    /// Render into `out`. Output written before a failure is left in place.
    pub fn render<W: Write>(&self, input: &RenderInput, out: W) -> Result<()> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(KubetmplError::RenderTemplate)?;

        debug!(
            "Rendering {} with {} ingress(es)",
            self.path.display(),
            input.ingress.len()
        );
        template
            .render_to_write(input, out)
            .map_err(KubetmplError::RenderTemplate)?;
        Ok(())
    }
}
