//! Failures surfaced by the gateways.
//!
//! Containers only care whether a failure carries a usable server message;
//! everything else about it is logged and otherwise treated as opaque.
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{status}: {}", .message.as_deref().unwrap_or("server error"))]
    Server {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
}

impl ApiError {
    pub fn server(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: Some(message.into()),
        }
    }

    /// The message supplied by the server, if it is not blank.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// User-facing text: the server message verbatim, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}
