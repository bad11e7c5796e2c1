//! Application state management

pub mod chat;
