//! # Data Transfer Objects (DTOs)
//!
//! This module contains the data structures exchanged between the frontend
//! and the backend chat route.
//!
//! ## Module Organization
//!
//! - [`chat`] - Chat message request/response bodies
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /chat
//! Content-Type: application/json
//!
//! {
//!   "message": "Hello"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "message": "Hi there"
//! }
//! ```

pub mod chat;
