// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ClientError;

/// Identifier of one batch-processing job, as minted by the service.
///
/// An id must not be empty, `.` or `..`: URLs resolve the last two as
/// dot-segments, so `/progress/..` would reach a different endpoint. The
/// value is otherwise carried verbatim; percent-encoding happens when the
/// request URL is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Result<Self, ClientError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ClientError::local("Job id must not be empty"));
        }
        if id == "." || id == ".." {
            return Err(ClientError::local(format!("Job id '{id}' is not a valid path segment")));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for JobId {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for JobId {
    type Error = ClientError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.0
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Response to `POST /process`. Opaque; returned exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessingStartResult(pub Value);

/// Response to `GET /progress/{jobId}`. Opaque; returned exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobProgress(pub Value);

/// Response to `GET /progress`. Opaque; returned exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllJobsProgress(pub Value);

/// Response to `GET /status`. Opaque; returned exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemStatus(pub Value);

impl ProcessingStartResult {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl JobProgress {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl AllJobsProgress {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl SystemStatus {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for ProcessingStartResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Value> for JobProgress {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Value> for AllJobsProgress {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Value> for SystemStatus {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
