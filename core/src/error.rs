//! Error types and the API failure normalizer

use serde::Deserialize;
use serde_json::{Map, Value};

/// A failed service call, reduced to the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Startup configuration failures
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Raw outcome of a failed HTTP exchange, before normalization
#[derive(Debug, Clone)]
pub enum Failure {
    /// No response was received.
    Local { message: String },
    /// The server responded but the exchange failed.
    Http {
        status: u16,
        message: String,
        body: String,
    },
}

impl Failure {
    /// Non-success status with its response body
    pub fn status(status: reqwest::StatusCode, url: &str, body: String) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unknown Error");
        Failure::Http {
            status: status.as_u16(),
            message: format!("Http failure response for {}: {} {}", url, status.as_u16(), reason),
            body,
        }
    }

    /// Success status whose body could not be decoded
    pub fn parse(status: reqwest::StatusCode, url: &str) -> Self {
        Failure::Http {
            status: status.as_u16(),
            message: format!("Http failure during parsing for {}", url),
            body: String::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

/// Convert any failure into the single user-facing message and log it.
pub fn normalize(failure: Failure) -> ServiceError {
    let message = resolve_message(failure);
    tracing::error!("API Error: {}", message);
    ServiceError { message }
}

fn resolve_message(failure: Failure) -> String {
    match failure {
        Failure::Local { message } => format!("Error: {}", message),
        Failure::Http {
            status,
            message,
            body,
        } => {
            let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();

            if let Some(Value::String(server_message)) = parsed.message {
                if !server_message.is_empty() {
                    return server_message;
                }
            }

            if let Some(Value::Object(errors)) = parsed.errors {
                return format!("Validation failed: {}", join_values(&errors));
            }

            format!("Error Code: {}\nMessage: {}", status, message)
        }
    }
}

/// Server order is kept; `Map` preserves insertion order.
fn join_values(errors: &Map<String, Value>) -> String {
    errors.values().map(render_value).collect::<Vec<_>>().join(", ")
}

/// Text form of one error value: arrays flatten to comma-separated items,
/// null becomes empty.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}
