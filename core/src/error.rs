//! The uniform error shape for the heroes API client.
//!
//! # Design
//! Every failed request collapses into a single `ApiError` value before it
//! reaches application code, no matter whether the server reported the
//! failure, the transport never got a response, or the client itself failed
//! while assembling the exchange. The error is constructed exactly once per
//! failure and never mutated afterwards; callers only ever observe this
//! shape, never the raw transport error.

use std::fmt;

use serde_json::Value;

use crate::http::HttpResponse;

/// Fallback message when a failure carries no usable body.
pub const UNEXPECTED_ERROR: &str = "Ocorreu um erro inesperado.";

/// Message used when the server reports structured validation errors.
pub const VALIDATION_ERROR: &str = "Erro de validação:";

/// Message used when no response was received at all.
pub const CONNECTION_ERROR: &str =
    "Não foi possível conectar ao servidor. Verifique sua conexão ou se a API está online.";

/// Normalized error produced for every failed request.
#[derive(Debug)]
pub struct ApiError {
    /// Human-readable description; never empty.
    pub message: String,
    /// Structured validation payload reported by the server, if any.
    pub details: Option<Value>,
    /// Status of the failure response; absent when none was received.
    pub status: Option<u16>,
    /// The original response, kept for caller inspection.
    pub response: Option<HttpResponse>,
}

impl ApiError {
    /// Normalize a failure response.
    ///
    /// The body is classified in priority order: a string `message` field
    /// wins, then an `errors` payload, then a plain-string body. Anything
    /// else falls back to [`UNEXPECTED_ERROR`].
    pub fn from_response(response: HttpResponse) -> Self {
        let (message, details) = classify_body(&response.body);
        Self {
            message,
            details,
            status: Some(response.status),
            response: Some(response),
        }
    }

    /// No response was received: the server is unreachable or the connection
    /// dropped before a status line arrived.
    pub fn connection() -> Self {
        Self {
            message: CONNECTION_ERROR.to_string(),
            details: None,
            status: None,
            response: None,
        }
    }

    /// A failure on the client side of the exchange (request serialization,
    /// response decoding), carrying the underlying error's own message.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: if message.is_empty() {
                UNEXPECTED_ERROR.to_string()
            } else {
                message
            },
            details: None,
            status: None,
            response: None,
        }
    }
}

/// Derive the message and optional details from a failure body.
fn classify_body(body: &str) -> (String, Option<Value>) {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => {
            if let Some(Value::String(message)) = fields.get("message") {
                (message.clone(), None)
            } else if let Some(errors) = fields.get("errors") {
                (VALIDATION_ERROR.to_string(), Some(errors.clone()))
            } else {
                (UNEXPECTED_ERROR.to_string(), None)
            }
        }
        Ok(Value::String(text)) => (text, None),
        Ok(_) => (UNEXPECTED_ERROR.to_string(), None),
        Err(_) if !body.trim().is_empty() => (body.to_string(), None),
        Err(_) => (UNEXPECTED_ERROR.to_string(), None),
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (HTTP {status})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}
