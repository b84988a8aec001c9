// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! HTTP client for a remote batch-processing service.
//!
//! This module wraps the service's job status API: starting a job, polling
//! the progress of one or all jobs, and reading the system status.
//!
//! # Architecture
//!
//! - [`JobStatusClient`] - the public client, one method per remote call
//! - [`ClientError`] / [`NormalizedError`] - failure taxonomy and the
//!   collapsed single-message form
//! - Payload types ([`ProcessingStartResult`], [`JobProgress`],
//!   [`AllJobsProgress`], [`SystemStatus`]) - opaque JSON passthrough
//! - A logging middleware on the `reqwest-middleware` stack that records each
//!   request and response
//!
//! # Example
//!
//! ```rust,no_run
//! use jobstatus::config::ClientConfig;
//! use jobstatus::http::JobStatusClient;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = JobStatusClient::new(ClientConfig {
//!     base_url: "http://localhost:8080/api/movie-rating".to_string(),
//!     ..ClientConfig::default()
//! })?;
//!
//! let status = client.get_system_status().await?;
//! println!("{}", status.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every operation returns [`ClientError`], whose `Display` is the message a
//! user should see:
//!
//! - Server errors carry the body's `message` field or `Server error (<status>)`
//! - Network errors (no response, timeout) carry a fixed connectivity message
//! - Local errors carry the reason the request could not be built

mod endpoints;
mod error;
mod http_client;
mod job_status_client;
mod middleware;
mod types;

pub use error::{ClientError, NETWORK_ERROR_MESSAGE, NormalizedError, UNKNOWN_ERROR_MESSAGE};
pub use job_status_client::JobStatusClient;
pub use types::{AllJobsProgress, JobId, JobProgress, ProcessingStartResult, SystemStatus};
