// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::collections::BTreeMap;

use anyhow::Context;
use config::Config;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::cli::ClientArgs;
use crate::http::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/movie-rating";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Transport settings for [`JobStatusClient`](crate::http::JobStatusClient).
///
/// Read from the `[client]` table of the configuration file. Missing keys
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root for all endpoint paths.
    pub base_url: String,
    /// Abort threshold for a single request.
    pub timeout_ms: u64,
    /// Headers merged into every outgoing request.
    pub default_headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_headers: BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]),
        }
    }
}

impl ClientConfig {
    pub const KEY_PREFIX: &'static str = "client";

    /// Extracts the `[client]` table, falling back to defaults when absent.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        match cfg.get::<ClientConfig>(Self::KEY_PREFIX) {
            Ok(client) => Ok(client),
            Err(config::ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(e).context("Could not read client configuration"),
        }
    }

    pub fn apply_args(&mut self, args: &ClientArgs) {
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(timeout_ms) = args.timeout_ms {
            self.timeout_ms = timeout_ms;
        }
    }

    /// Builds the headers sent with every request.
    ///
    /// `Content-Type: application/json` is always present unless a
    /// configured header replaces it.
    pub fn header_map(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &self.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::local(format!("Invalid header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::local(format!("Invalid value for header '{name}': {e}")))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }
}
