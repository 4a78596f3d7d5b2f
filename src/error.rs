//! Error types returned by every Unosend operation.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Machine-readable error code.
///
/// The API reports either a string code (`"invalid_domain"`) or a numeric one.
/// When the server gives no code, the HTTP status is used. Local failures that
/// never reached the server report `Number(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Number(i64),
    Text(String),
}

impl ErrorCode {
    /// Code used for failures where no response was received.
    pub const TRANSPORT: ErrorCode = ErrorCode::Number(0);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Number(n) => write!(f, "{n}"),
            ErrorCode::Text(s) => f.write_str(s),
        }
    }
}

impl From<u16> for ErrorCode {
    fn from(status: u16) -> Self {
        ErrorCode::Number(i64::from(status))
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        ErrorCode::Text(code.to_string())
    }
}

/// Errors that can occur when talking to the Unosend API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The client was constructed without an API key.
    #[error("API key is required")]
    MissingApiKey,

    /// The API key or user agent cannot be sent as an HTTP header.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The request never completed (connection refused, DNS, timeout, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message} (code: {code}, status: {status_code})")]
    Api {
        message: String,
        code: ErrorCode,
        status_code: u16,
    },

    /// The server answered 2xx but the body was not JSON.
    #[error("failed to parse response body (status {status_code}): {source}")]
    Json {
        status_code: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Human-readable message, as reported by the server when available.
    ///
    /// For transport failures this is the full cause chain, e.g.
    /// `error sending request for url (...): ...: Connection refused`.
    pub fn message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            Error::Request(err) => cause_chain(err),
            other => other.to_string(),
        }
    }

    /// Error code; `0` for anything that never got a response.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Api { code, .. } => code.clone(),
            Error::Json { status_code, .. } => ErrorCode::from(*status_code),
            Error::MissingApiKey | Error::InvalidHeader(_) | Error::Request(_) => {
                ErrorCode::TRANSPORT
            }
        }
    }

    /// HTTP status of the response, if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } | Error::Json { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// `true` when the request never reached the server.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Request(_))
    }

    /// Build an [`Error::Api`] from a non-2xx response body.
    ///
    /// Expects the `{"error": {"message", "code"}}` envelope but tolerates
    /// anything: a non-JSON body becomes the message, and a missing code falls
    /// back to the HTTP status.
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let status_code = status.as_u16();
        let parsed = serde_json::from_slice::<Value>(body).ok();
        let envelope = parsed.as_ref().and_then(|v| v.get("error"));

        let message = envelope
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| {
                // Some gateways answer with plain text.
                if parsed.is_none() && !body.is_empty() {
                    Some(String::from_utf8_lossy(body).into_owned())
                } else {
                    None
                }
            })
            .unwrap_or_else(|| "Unknown error".to_string());

        let code = envelope
            .and_then(|e| e.get("code"))
            .and_then(|c| match c {
                Value::String(s) => Some(ErrorCode::Text(s.clone())),
                Value::Number(n) => n.as_i64().map(ErrorCode::Number),
                _ => None,
            })
            .unwrap_or_else(|| ErrorCode::from(status_code));

        Error::Api {
            message,
            code,
            status_code,
        }
    }
}

/// `err` followed by each of its sources, joined with `": "`.
fn cause_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // hyper repeats the inner error in its own Display.
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
