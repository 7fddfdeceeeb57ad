// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Document Registry Client
//!
//! This crate provides a rate-limited client for the document registration
//! API. Submissions are admitted through a fixed-window gate:
//!
//! - At most `request_limit` submissions begin within any window
//! - Callers beyond the cap block until capacity returns
//! - Capacity is restored to full once per window by a background task
//! - Every admitted call returns its slot on every exit path
//!
//! The gate deliberately does not reconcile replenishment against slots
//! still held by in-flight submissions, so up to twice the limit can be in
//! flight across a window boundary. See [`gate::AdmissionGate`] for details.

pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod gate;

pub use client::{SubmissionClient, SubmissionOutcome};
pub use config::ClientConfig;
pub use document::{Description, Document, Product};
pub use error::{ConfigError, SubmitError};
pub use gate::{AdmissionGate, AdmissionPermit};
