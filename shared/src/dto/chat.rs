//! # Chat Data Transfer Objects
//!
//! Request and response bodies for the chat endpoint. The backend accepts a
//! single user message and replies with a single bot message; both sides of
//! the exchange carry one `message` field.

use serde::{Deserialize, Serialize};

/// Request body for the chat endpoint.
///
/// Serializes to `{"message": "<user text>"}`. The frontend sends the
/// trimmed user input; whitespace-only input is rejected before a request
/// is ever built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response body from the chat endpoint.
///
/// Only the `message` field is read; any extra fields the backend includes
/// are ignored. A body without `message` is a decode error and is treated
/// by the frontend as a failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}
