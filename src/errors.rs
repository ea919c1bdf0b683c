use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Fallback message used when a failure carries no diagnostic text at all.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Wire shape of an error body returned by the forecasting service.
///
/// Every error response is expected to carry a `detail` field with a
/// human-readable message; anything else in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Closed taxonomy of failed remote calls.
///
/// Each variant is derived deterministically from the transport outcome, so
/// the same outcome always classifies the same way regardless of call site.
/// `Display` renders the single user-facing message surfaced to the
/// presentation layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The service could not be reached at all (DNS failure, connection
    /// refused). The message names the endpoint so the operator can tell
    /// which backend is down.
    #[error("cannot reach forecasting service at {endpoint}")]
    NetworkUnreachable { endpoint: String },

    /// The request exceeded the configured deadline before settling.
    #[error("request timed out")]
    Timeout,

    /// The service answered with a non-2xx status. `message` is the body's
    /// `detail` field when present, otherwise the call site's fallback text.
    #[error("server error {status} {status_text}: {message}")]
    ServerError {
        status: u16,
        status_text: String,
        message: String,
    },

    /// The request was sent but the response never completed.
    #[error("request was sent but no response was received")]
    NoResponse,

    /// A local fault before or after the wire: malformed input caught prior
    /// to dispatch, or a response body that could not be decoded.
    #[error("{0}")]
    ClientFault(String),
}

impl ClientError {
    /// Classify a non-2xx HTTP response.
    ///
    /// A response-bearing failure always takes this path; it must never fall
    /// through to the reachability variants below.
    pub fn from_response(status: StatusCode, detail: Option<String>, fallback: &str) -> Self {
        Self::ServerError {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: detail.unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// Classify a transport-level failure from `reqwest`.
    ///
    /// Checked in precedence order: timeout, then an interrupted body (sent
    /// but never fully answered), then reachability, then an undecodable
    /// payload. Anything left is a local fault carrying whatever diagnostic
    /// text the transport produced.
    pub fn from_transport(endpoint: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_body() {
            Self::NoResponse
        } else if err.is_connect() {
            Self::NetworkUnreachable {
                endpoint: endpoint.to_string(),
            }
        } else if err.is_decode() {
            Self::ClientFault(format!("invalid response body: {err}"))
        } else {
            let text = err.to_string();
            if text.is_empty() {
                Self::ClientFault(UNKNOWN_ERROR_MESSAGE.to_string())
            } else {
                Self::ClientFault(text)
            }
        }
    }

    /// Local fault raised before any request is dispatched.
    pub fn fault(message: impl Into<String>) -> Self {
        Self::ClientFault(message.into())
    }

    /// Short machine-readable label for the category, used in logs.
    pub fn category(&self) -> &'static str {
        match self {
            Self::NetworkUnreachable { .. } => "network_unreachable",
            Self::Timeout => "timeout",
            Self::ServerError { .. } => "server_error",
            Self::NoResponse => "no_response",
            Self::ClientFault(_) => "client_fault",
        }
    }
}
