// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for credential resolution, client creation, and ingress listing.

pub mod credentials;
pub mod ingresses;

pub use credentials::{resolve, CredentialSource, Credentials};
pub use ingresses::{create_client, list_ingresses};
