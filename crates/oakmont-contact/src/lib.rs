//! Oakmont Power Contact Form Core
//!
//! This crate holds everything behind the "Get in Touch" form: the field
//! values, the status banner projection, and the controller that delivers
//! an inquiry to the contact endpoint and reports the outcome.

pub mod config;
pub mod controller;
pub mod form;
pub mod schedule;
pub mod status;
pub mod transport;

use thiserror::Error;

pub use config::ContactConfig;
pub use controller::{SubmissionController, SubmissionOutcome};
pub use form::{FieldId, FormData, FormState};
pub use schedule::{HideHandle, HideScheduler};
#[cfg(not(target_arch = "wasm32"))]
pub use schedule::TokioScheduler;
pub use status::{StatusBoard, StatusPhase, SubmissionStatus};
pub use transport::{ContactTransport, HttpTransport};

/// Maximum number of characters of an error response body kept for display
pub const DETAIL_LIMIT: usize = 50;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ContactResult<T> = Result<T, ContactError>;

/// Why a submission did not end in a successful response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The endpoint answered with a non-success status code
    #[error("HTTP error! Status: {status}. Details: {detail}")]
    Http { status: u16, detail: String },

    /// No response was obtained at all
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    /// Build an HTTP failure, keeping at most [`DETAIL_LIMIT`] characters of the body.
    pub fn http(status: u16, body: &str) -> Self {
        SubmitError::Http {
            status,
            detail: truncate_detail(body),
        }
    }

    pub fn transport(description: impl Into<String>) -> Self {
        SubmitError::Transport(description.into())
    }

    /// Text shown in the status banner for this failure.
    pub fn status_message(&self) -> String {
        match self {
            SubmitError::Http { .. } => format!("{} {}", status::FAILURE_PREFIX, self),
            SubmitError::Transport(description) => match first_clause(description) {
                "" => status::FAILURE_PREFIX.to_string(),
                clause => format!("{} {}.", status::FAILURE_PREFIX, clause),
            },
        }
    }
}

fn truncate_detail(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(DETAIL_LIMIT).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Everything before the first period.
fn first_clause(description: &str) -> &str {
    description.split('.').next().unwrap_or_default().trim()
}
