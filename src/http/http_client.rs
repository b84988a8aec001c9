// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use super::endpoints::Endpoint;
use super::error::ClientError;
use super::middleware::{EndpointPath, LoggingMiddleware};
use crate::config::ClientConfig;

pub(crate) struct HttpClient {
    base_url: Url,
    timeout: Duration,
    client: reqwest_middleware::ClientWithMiddleware,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::local(format!("Base URL cannot carry a path: {base_url}")));
        }
        if config.timeout_ms == 0 {
            return Err(ClientError::local("Request timeout must be greater than zero"));
        }
        let timeout = Duration::from_millis(config.timeout_ms);

        let inner_client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(config.header_map()?)
            .build()?;

        let client = reqwest_middleware::ClientBuilder::new(inner_client)
            .with(LoggingMiddleware)
            .build();

        Ok(Self {
            base_url,
            timeout,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends one request to `endpoint` and decodes the success body.
    ///
    /// Non-2xx responses become [`ClientError::Server`]. An empty success body
    /// decodes as JSON `null` and a non-JSON body as a JSON string.
    pub async fn send_request<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, ClientError> {
        let url = endpoint.url(&self.base_url)?;
        let resp = self
            .client
            .request(endpoint.method(), url)
            .with_extension(EndpointPath(endpoint.to_string()))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(ClientError::server(status, &text));
        }

        let value = parse_body(&text);
        serde_json::from_value(value).map_err(|e| ClientError::local(format!("Unexpected response body: {e}")))
    }
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
