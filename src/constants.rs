// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name the template is registered under; shows up in template error locations
pub const TEMPLATE_NAME: &str = "kube";

/// Kubeconfig location relative to the user's home directory
pub const KUBECONFIG_HOME_PATH: [&str; 2] = [".kube", "config"];
