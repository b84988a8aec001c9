// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use async_trait::async_trait;
use http::Extensions;
use log::{debug, error};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};

/// Service-relative path of a request (`/progress/abc123`), attached as a
/// request extension so log lines do not depend on the deployment base path.
#[derive(Debug, Clone)]
pub(crate) struct EndpointPath(pub String);

/// Logs every request before it is sent and every response once it arrives.
///
/// The response body is buffered so it can be logged, then re-attached to a
/// rebuilt response, so callers further up the chain read the same bytes.
/// Nothing here changes the outcome of a request.
pub(crate) struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let path = match extensions.get::<EndpointPath>() {
            Some(EndpointPath(path)) => path.clone(),
            None => req.url().path().to_string(),
        };
        debug!(
            method:% = method,
            path = &*path;
            "Sending request"
        );

        let response = match next.run(req, extensions).await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    method:% = method,
                    path = &*path,
                    error:% = e;
                    "Request error"
                );
                return Err(e);
            },
        };

        let status = response.status();
        let version = response.version();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                error!(
                    method:% = method,
                    path = &*path,
                    status = status.as_u16(),
                    error:% = e;
                    "Request error"
                );
                return Err(e.into());
            },
        };

        debug!(
            status = status.as_u16(),
            body = &*String::from_utf8_lossy(&body);
            "Received response"
        );

        let mut builder = http::Response::builder().status(status).version(version);
        if let Some(h) = builder.headers_mut() {
            *h = headers;
        }
        let rebuilt = builder
            .body(body)
            .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;

        Ok(Response::from(rebuilt))
    }
}
