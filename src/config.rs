// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Configuration for the submission client.
//!
//! The replenishment window and request limit are deliberately required:
//! there is no sensible default cap for a remote API quota, so both must be
//! supplied by the caller. Only the endpoint URL has a default (the
//! production registry).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production endpoint of the document registration API.
pub const DEFAULT_ENDPOINT: &str = "https://ismp.crpt.ru/api/v3/lk/documents/create";

/// Configuration for [`crate::SubmissionClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint URL for document creation (default: production registry)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Replenishment window in milliseconds (required)
    pub window_ms: u64,

    /// Maximum submissions admitted per window (required)
    pub request_limit: u32,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl ClientConfig {
    /// Create a configuration for the production endpoint.
    pub fn new(window: Duration, request_limit: u32) -> Self {
        Self {
            endpoint: default_endpoint(),
            window_ms: window.as_millis() as u64,
            request_limit,
        }
    }

    /// Get the replenishment window duration.
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}
