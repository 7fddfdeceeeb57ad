// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for configuration and submission.
//!
//! Submission errors are propagated to the caller unchanged; the client
//! performs no retries and swallows nothing. A non-200 response from the
//! registry is *not* an error, it is reported as a
//! [`crate::SubmissionOutcome`].

use thiserror::Error;

/// Errors from [`crate::SubmissionClient::submit`].
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The caller supplied an empty or blank signature.
    #[error("signature must not be empty")]
    EmptySignature,

    /// The document could not be serialized to its JSON wire form.
    #[error("failed to serialize document: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP request failed to complete (connection, timeout, I/O).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors from [`crate::SubmissionClient::new`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The endpoint is not a valid URL.
    #[error("invalid endpoint URL {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A zero request limit would block every submission forever.
    #[error("request limit must be at least 1")]
    ZeroRequestLimit,

    /// A zero window would replenish continuously.
    #[error("replenishment window must be non-zero")]
    ZeroWindow,
}
