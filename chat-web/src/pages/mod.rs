//! Page modules - single chat page only

pub mod chat;

pub use chat::ChatPage;
