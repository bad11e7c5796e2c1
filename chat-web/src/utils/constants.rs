//! Application constants

/// Default backend route the widget posts chat messages to.
///
/// Overridable through [`crate::state::chat::ChatConfig`].
pub const DEFAULT_CHAT_ENDPOINT: &str = "/chat";

/// Bubble text shown in place of a bot reply when a send fails for any
/// reason (network error, non-2xx status, undecodable body).
pub const SEND_FAILURE_TEXT: &str = "Sorry, there was an error processing your request.";
