//! UI Components

pub mod chat_log;

pub use chat_log::{ChatLog, MessageBubble};
