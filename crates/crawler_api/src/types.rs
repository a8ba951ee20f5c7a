use std::fmt;

use crate::records::JobRecord;

/// Generation counter echoed through search requests so the state machine can
/// discard responses from superseded submissions.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidBaseUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidBaseUrl => write!(f, "invalid base url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "response decode error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Completion notifications emitted by the background client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    SearchCompleted {
        generation: Generation,
        result: Result<Vec<JobRecord>, ApiError>,
    },
    ReportCompleted {
        result: Result<(), ApiError>,
    },
}
