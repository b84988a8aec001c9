// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

pub mod cli;
pub mod config;
pub mod http;
pub mod log;

pub use crate::config::ClientConfig;
pub use crate::http::{ClientError, JobId, JobStatusClient, NormalizedError};
