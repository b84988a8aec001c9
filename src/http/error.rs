// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for job status client operations.
//!
//! Every failure the client can produce is one of three kinds, detected in
//! this order:
//!
//! - [`ClientError::Server`]: the service answered with a non-2xx status.
//! - [`ClientError::Network`]: the request went out but no response came back
//!   (connection refused, DNS failure, timeout, dropped connection).
//! - [`ClientError::Local`]: the request could not be issued at all, usually
//!   because the configuration is malformed.
//!
//! Callers that only care about a human readable message can collapse any of
//! these into a [`NormalizedError`].
//!
//! # Example
//!
//! ```rust
//! use jobstatus::http::{ClientError, NormalizedError};
//!
//! let err = ClientError::server(reqwest::StatusCode::NOT_FOUND, "");
//! assert_eq!(err.to_string(), "Server error (404)");
//!
//! let normalized = NormalizedError::from(err);
//! assert_eq!(normalized.message, "Server error (404)");
//! ```

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Message used for every failure where no response was received.
pub const NETWORK_ERROR_MESSAGE: &str = "Network connection failed, please check your network settings";

/// Message used for local failures that carry no description of their own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Errors that can occur while talking to the batch-processing service.
///
/// The `Display` implementation renders only the message, so
/// `err.to_string()` is what a user should see regardless of the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The service responded with a non-success HTTP status code.
    ///
    /// `message` is taken from the response body's `message` field when it
    /// is present, otherwise it reads `Server error (<status>)`.
    #[error("{message}")]
    Server {
        /// The HTTP status code returned by the service.
        status: StatusCode,
        /// The extracted or synthesized message.
        message: String,
    },

    /// The request was sent but no response was received.
    #[error("{message}")]
    Network {
        /// Always [`NETWORK_ERROR_MESSAGE`].
        message: String,
    },

    /// The request could not be constructed or issued.
    #[error("{message}")]
    Local {
        /// Description of the underlying failure.
        message: String,
    },
}

impl ClientError {
    /// Builds a server error from a status code and the raw response body.
    pub fn server(status: StatusCode, body: &str) -> Self {
        Self::Server {
            status,
            message: server_message(status, body),
        }
    }

    pub fn network() -> Self {
        Self::Network {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    /// Builds a local error, substituting [`UNKNOWN_ERROR_MESSAGE`] for an
    /// empty description.
    pub fn local(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Local {
                message: UNKNOWN_ERROR_MESSAGE.to_string(),
            }
        } else {
            Self::Local { message }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Server { message, .. } | Self::Network { message } | Self::Local { message } => message,
        }
    }

    /// The HTTP status code, for server-responded errors only.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::local(err.to_string())
        } else {
            Self::network()
        }
    }
}

impl From<reqwest_middleware::Error> for ClientError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => Self::from(e),
            reqwest_middleware::Error::Middleware(e) => Self::local(e.to_string()),
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::local(format!("Invalid base URL: {err}"))
    }
}

/// The single error shape handed to callers that do not distinguish causes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NormalizedError {
    pub message: String,
}

impl From<ClientError> for NormalizedError {
    fn from(err: ClientError) -> Self {
        let message = match err {
            ClientError::Server { message, .. } | ClientError::Network { message } | ClientError::Local { message } => {
                message
            },
        };
        Self { message }
    }
}

/// Picks the message for a server-responded error.
///
/// Uses the body's `message` field unless it is absent or falsy (`null`,
/// `false`, `0`, `""`), in which case `Server error (<status>)` is returned.
/// Non-string values are rendered as JSON text.
fn server_message(status: StatusCode, body: &str) -> String {
    let extracted = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").cloned())
        .and_then(|message| match message {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        });

    extracted.unwrap_or_else(|| format!("Server error ({})", status.as_u16()))
}
