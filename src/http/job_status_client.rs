// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! High-level client for the batch-processing service.
//!
//! [`JobStatusClient`] exposes the four remote calls the service offers:
//!
//! - starting a processing job
//! - polling the progress of one job
//! - polling the progress of every job
//! - reading the service's overall status
//!
//! Response bodies are handed back untouched. Failures are logged and then
//! returned as a [`ClientError`]; nothing is retried or cached.
//!
//! # Example
//!
//! ```rust,no_run
//! use jobstatus::config::ClientConfig;
//! use jobstatus::http::{JobId, JobStatusClient};
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = JobStatusClient::new(ClientConfig::default())?;
//!
//! let started = client.start_processing().await?;
//! println!("Started: {}", started.0);
//!
//! let progress = client.get_job_progress(&JobId::new("abc123")?).await?;
//! println!("Progress: {}", progress.0);
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use log::error;
use url::Url;

use super::endpoints::Endpoint;
use super::error::ClientError;
use super::http_client::HttpClient;
use super::types::{AllJobsProgress, JobId, JobProgress, ProcessingStartResult, SystemStatus};
use crate::config::ClientConfig;

/// Client for the batch-processing service's job status API.
///
/// The configuration is fixed at construction. The client holds no other
/// state, so one instance can be shared (for example behind an `Arc`) and
/// used from many tasks at once; concurrent calls are fully independent.
pub struct JobStatusClient {
    http_client: HttpClient,
}

impl JobStatusClient {
    /// Creates a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Local`] if the base URL is malformed or cannot
    /// carry a path, the timeout is zero, or a default header is invalid.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self { http_client })
    }

    pub fn base_url(&self) -> &Url {
        self.http_client.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.http_client.timeout()
    }

    /// Asks the service to start a new batch-processing job (`POST /process`).
    pub async fn start_processing(&self) -> Result<ProcessingStartResult, ClientError> {
        self.http_client
            .send_request(Endpoint::Process)
            .await
            .inspect_err(|e| {
                error!(
                    operation = "start_processing",
                    error:% = e;
                    "Failed to start batch processing"
                );
            })
    }

    /// Fetches the progress of one job (`GET /progress/{jobId}`).
    ///
    /// The job id is sent as a single, percent-encoded path segment.
    pub async fn get_job_progress(&self, job_id: &JobId) -> Result<JobProgress, ClientError> {
        self.http_client
            .send_request(Endpoint::Progress(job_id))
            .await
            .inspect_err(|e| {
                error!(
                    operation = "get_job_progress",
                    job_id = job_id.as_str(),
                    error:% = e;
                    "Failed to fetch job progress"
                );
            })
    }

    /// Fetches the progress of every job the service knows (`GET /progress`).
    pub async fn get_all_progress(&self) -> Result<AllJobsProgress, ClientError> {
        self.http_client
            .send_request(Endpoint::AllProgress)
            .await
            .inspect_err(|e| {
                error!(
                    operation = "get_all_progress",
                    error:% = e;
                    "Failed to fetch progress of all jobs"
                );
            })
    }

    /// Fetches the service's overall status (`GET /status`).
    pub async fn get_system_status(&self) -> Result<SystemStatus, ClientError> {
        self.http_client
            .send_request(Endpoint::Status)
            .await
            .inspect_err(|e| {
                error!(
                    operation = "get_system_status",
                    error:% = e;
                    "Failed to fetch system status"
                );
            })
    }
}
