//! Chat API client
//!
//! One request per user send: POST the message as JSON, read the reply.
//! Every failure mode (network error, non-2xx status, undecodable body)
//! collapses into an `Err(String)`; the caller renders the same fallback
//! bubble either way, so the error text is only ever logged.

use gloo_net::http::Request;
use shared::dto::chat::{ChatRequest, ChatResponse};

/// Post one user message to the chat endpoint and return the bot reply.
///
/// `Request::json` serializes the body and sets the
/// `Content-Type: application/json` header.
pub async fn send_chat_message(endpoint: &str, text: &str) -> Result<String, String> {
    let request = ChatRequest {
        message: text.to_string(),
    };

    let response = Request::post(endpoint)
        .json(&request)
        .map_err(|e| format!("failed to encode chat request: {e:?}"))?
        .send()
        .await
        .map_err(|e| format!("request to {endpoint} failed: {e:?}"))?;

    if !response.ok() {
        return Err(format!("chat endpoint returned status {}", response.status()));
    }

    let reply: ChatResponse = response
        .json()
        .await
        .map_err(|e| format!("failed to decode chat response: {e:?}"))?;

    Ok(reply.message)
}
