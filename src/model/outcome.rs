/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! What a request ends up as once both hooks have run.

use crate::model::response::HttpResponse;
use reqwest::StatusCode;
use std::fmt;
use std::sync::Arc;

/// Broad reason a call produced no response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request did not complete within the timeout
    Timeout,
    /// The connection could not be established
    Connect,
    /// The response body could not be read
    Body,
    /// Anything else (redirect loops, invalid URL, ...)
    Other,
}

/// Failure of a call that never produced a response
///
/// Errors raised by reqwest keep the original error, reachable through
/// [`std::error::Error::source`]. Equality only looks at `kind` and `message`.
#[derive(Debug, Clone)]
pub struct TransportError {
    /// Failure category
    pub kind: TransportErrorKind,
    /// Human readable detail
    pub message: String,
    source: Option<Arc<reqwest::Error>>,
}

impl TransportError {
    /// Creates a transport error with no underlying cause
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the reqwest error this failure came from
    #[must_use]
    pub fn with_source(mut self, source: reqwest::Error) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// The reqwest error this failure came from, if any
    #[must_use]
    pub fn reqwest_error(&self) -> Option<&reqwest::Error> {
        self.source.as_deref()
    }
}

impl PartialEq for TransportError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for TransportError {}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Connect => "connect",
            TransportErrorKind::Body => "body",
            TransportErrorKind::Other => "transport",
        };
        write!(f, "{kind} error: {}", self.message)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let kind = if e.is_timeout() {
            TransportErrorKind::Timeout
        } else if e.is_connect() {
            TransportErrorKind::Connect
        } else if e.is_body() || e.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Other
        };
        Self::new(kind, e.to_string()).with_source(e)
    }
}

/// Failure of the request hook or of building the request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// A header value could not be encoded
    InvalidHeader(String),
    /// The body could not be encoded
    InvalidBody(String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidHeader(msg) => write!(f, "invalid header: {msg}"),
            RequestError::InvalidBody(msg) => write!(f, "invalid body: {msg}"),
        }
    }
}

impl std::error::Error for RequestError {}

/// Why a request was rejected
///
/// Each variant carries the original value untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// A response arrived but its status is not `200 OK`
    Status(HttpResponse),
    /// No response arrived
    Transport(TransportError),
    /// The request never left: the request hook or body encoding failed
    Request(RequestError),
    /// The outcome was suppressed (offline); only produced by [`Outcome::into_result`]
    Suppressed,
}

impl Rejection {
    /// Status of the rejected response, if a response arrived
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|response| response.status)
    }

    /// The rejected response, if a response arrived
    #[must_use]
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            Rejection::Status(response) => Some(response),
            _ => None,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Status(response) => write!(f, "rejected with status {}", response.status),
            Rejection::Transport(e) => write!(f, "no response: {e}"),
            Rejection::Request(e) => write!(f, "request not sent: {e}"),
            Rejection::Suppressed => write!(f, "suppressed while offline"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Final result of a request as seen by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `200 OK`, the response untouched
    Resolved(HttpResponse),
    /// Anything else that should reach the caller
    Rejected(Rejection),
    /// The network is down; the reachability flag was updated and nothing is propagated
    Suppressed,
}

impl Outcome {
    /// `true` for [`Outcome::Resolved`]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Outcome::Resolved(_))
    }

    /// `true` for [`Outcome::Rejected`]
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// `true` for [`Outcome::Suppressed`]
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Outcome::Suppressed)
    }

    /// Flattens the outcome into a `Result`, mapping a suppressed outcome to
    /// [`Rejection::Suppressed`]
    pub fn into_result(self) -> Result<HttpResponse, Rejection> {
        match self {
            Outcome::Resolved(response) => Ok(response),
            Outcome::Rejected(rejection) => Err(rejection),
            Outcome::Suppressed => Err(Rejection::Suppressed),
        }
    }
}
