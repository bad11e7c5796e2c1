//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the chat-web frontend and
//! the backend chat API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::chat`]**: Chat request/response bodies
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//! - Unknown fields in incoming bodies are ignored on deserialization
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::chat::ChatRequest;
//!
//! let request = ChatRequest {
//!     message: "Hello".to_string(),
//! };
//!
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(body, r#"{"message":"Hello"}"#);
//! ```

pub mod dto;
