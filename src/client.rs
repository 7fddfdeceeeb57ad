// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rate-limited submission client for the document registry.
//!
//! One `submit` call is one admission slot, one serialization, and one
//! HTTP POST. The client is stateless across calls apart from the shared
//! gate; share it between tasks behind an `Arc`.

use crate::config::ClientConfig;
use crate::document::Document;
use crate::error::{ConfigError, SubmitError};
use crate::gate::AdmissionGate;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::{debug, info, warn};
use url::Url;

/// Header carrying the caller-supplied detached signature.
const SIGNATURE_HEADER: &str = "Signature";

/// Status code and reason phrase reported by the registry.
///
/// Only 200 counts as success; every other status is carried back to the
/// caller as data, with no interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    status: StatusCode,
}

impl SubmissionOutcome {
    /// Numeric status code.
    pub fn code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Canonical reason phrase for the status code.
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("Unknown")
    }

    /// Whether the registry accepted the document (status 200 exactly).
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

impl std::fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// Rate-limited client for the document registration endpoint.
pub struct SubmissionClient {
    gate: AdmissionGate,
    http: reqwest::Client,
    endpoint: Url,
}

impl SubmissionClient {
    /// Create a client from the given configuration.
    ///
    /// Builds the admission gate and spawns its replenish task, so this
    /// must be called inside a tokio runtime.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        if config.request_limit == 0 {
            return Err(ConfigError::ZeroRequestLimit);
        }
        if config.window_ms == 0 {
            return Err(ConfigError::ZeroWindow);
        }
        let endpoint =
            Url::parse(&config.endpoint).map_err(|source| ConfigError::InvalidEndpoint {
                url: config.endpoint.clone(),
                source,
            })?;

        info!(
            endpoint = %endpoint,
            window_ms = config.window_ms,
            request_limit = config.request_limit,
            "Creating submission client"
        );

        Ok(Self {
            gate: AdmissionGate::new(config.window(), config.request_limit),
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    /// Submit one document with a detached signature.
    ///
    /// Blocks while the current window's admissions are exhausted. The
    /// admission slot is returned on every exit path: success, non-200
    /// status, serialization failure, and transport failure alike.
    /// Dropping the future while it is still waiting for admission
    /// consumes no capacity; dropping it mid-request returns the slot.
    pub async fn submit(
        &self,
        document: &Document,
        signature: &str,
    ) -> Result<SubmissionOutcome, SubmitError> {
        if signature.trim().is_empty() {
            return Err(SubmitError::EmptySignature);
        }

        let _permit = self.gate.acquire().await;
        debug!(doc_id = %document.doc_id, "Admitted, dispatching submission");

        let body = serde_json::to_vec(document)?;
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, signature)
            .body(body)
            .send()
            .await?;

        let outcome = SubmissionOutcome {
            status: response.status(),
        };
        if outcome.is_success() {
            info!(doc_id = %document.doc_id, outcome = %outcome, "Document registered");
        } else {
            warn!(doc_id = %document.doc_id, outcome = %outcome, "Registry returned non-success status");
        }

        Ok(outcome)
    }

    /// The admission gate guarding this client's submissions.
    pub fn gate(&self) -> &AdmissionGate {
        &self.gate
    }
}
