//! Chat conversation state management
//!
//! The conversation itself is a plain struct with no DOM or signal
//! dependencies, so the whole send/settle lifecycle is unit-testable on any
//! target. Components reach it through [`ChatContext`], a Leptos context
//! that wraps the conversation in a signal.

use leptos::prelude::*;

use crate::utils::constants::{DEFAULT_CHAT_ENDPOINT, SEND_FAILURE_TEXT};

/// Which side of the exchange a message belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One rendered conversation turn. Never persisted; discarded with the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// True when the trimmed input is non-empty
pub fn send_enabled(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Append-only message log plus the single in-flight request flag
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    in_flight: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether a send may start right now.
    ///
    /// Both trigger paths (send button, Enter key) must consult this one
    /// gate so the disabled state cannot diverge between them.
    pub fn can_send(&self, draft: &str) -> bool {
        !self.in_flight && send_enabled(draft)
    }

    /// Start a send: append the user bubble and mark the request in flight.
    ///
    /// Returns the trimmed text to post, or `None` when the draft is
    /// whitespace-only or another request is still outstanding. `None`
    /// means nothing was appended and no request should be issued.
    pub fn begin_send(&mut self, draft: &str) -> Option<String> {
        if !self.can_send(draft) {
            return None;
        }
        let text = draft.trim().to_string();
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.clone(),
        });
        self.in_flight = true;
        Some(text)
    }

    /// Settle a send with the backend's reply, re-enabling further sends.
    pub fn complete(&mut self, reply: String) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: reply,
        });
        self.in_flight = false;
    }

    /// Settle a failed send with the fixed fallback bubble, re-enabling
    /// further sends. Every failure mode lands here; none are fatal.
    pub fn fail(&mut self) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: SEND_FAILURE_TEXT.to_string(),
        });
        self.in_flight = false;
    }
}

/// Run one send attempt end to end: gate check, user bubble, draft reset.
///
/// On an accepted send the draft is cleared and the trimmed text to post is
/// returned; on a rejected send (whitespace-only draft, or a request still
/// in flight) the draft is left untouched and `None` is returned.
pub fn submit_draft(conversation: &mut Conversation, draft: &mut String) -> Option<String> {
    let text = conversation.begin_send(draft)?;
    draft.clear();
    Some(text)
}

/// Widget configuration, provided as context by the root component
#[derive(Clone, Debug)]
pub struct ChatConfig {
    /// Backend route the widget posts to
    pub endpoint: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
        }
    }
}

/// Global chat context
#[derive(Clone, Copy)]
pub struct ChatContext {
    pub conversation: RwSignal<Conversation>,
}

impl ChatContext {
    pub fn new() -> Self {
        Self {
            conversation: RwSignal::new(Conversation::new()),
        }
    }

    pub fn can_send(&self, draft: &str) -> bool {
        self.conversation.with(|conversation| conversation.can_send(draft))
    }

    pub fn complete(&self, reply: String) {
        self.conversation
            .update(|conversation| conversation.complete(reply));
    }

    pub fn fail(&self) {
        self.conversation.update(|conversation| conversation.fail());
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.conversation
            .with(|conversation| conversation.messages().to_vec())
    }

    pub fn message_count(&self) -> usize {
        self.conversation
            .with(|conversation| conversation.messages().len())
    }
}

pub fn provide_chat_context() -> ChatContext {
    let context = ChatContext::new();
    provide_context(context);
    context
}

pub fn use_chat_context() -> ChatContext {
    expect_context::<ChatContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_enabled_requires_non_whitespace() {
        assert!(send_enabled("Hello"));
        assert!(send_enabled("  Hello  "));
        assert!(!send_enabled(""));
        assert!(!send_enabled("   "));
        assert!(!send_enabled("\t\n"));
    }

    #[test]
    fn test_begin_send_trims_and_appends_user_bubble() {
        let mut conversation = Conversation::new();
        let text = conversation.begin_send("  Hello  ");

        assert_eq!(text.as_deref(), Some("Hello"));
        assert_eq!(
            conversation.messages(),
            &[ChatMessage {
                sender: Sender::User,
                text: "Hello".to_string(),
            }]
        );
        assert!(conversation.in_flight());
    }

    #[test]
    fn test_whitespace_only_send_is_a_noop() {
        let mut conversation = Conversation::new();

        assert_eq!(conversation.begin_send("   "), None);
        assert!(conversation.messages().is_empty());
        assert!(!conversation.in_flight());
    }

    #[test]
    fn test_second_send_blocked_while_in_flight() {
        let mut conversation = Conversation::new();
        conversation.begin_send("first").unwrap();

        // Both the button and the Enter key go through can_send/begin_send,
        // so neither can start another request before the first settles.
        assert!(!conversation.can_send("second"));
        assert_eq!(conversation.begin_send("second"), None);
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn test_complete_appends_bot_reply_and_re_enables() {
        let mut conversation = Conversation::new();
        conversation.begin_send("Hello").unwrap();
        conversation.complete("Hi there".to_string());

        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(conversation.messages()[1].sender, Sender::Bot);
        assert_eq!(conversation.messages()[1].text, "Hi there");
        assert!(!conversation.in_flight());
        assert!(conversation.can_send("again"));
    }

    #[test]
    fn test_fail_appends_fallback_and_re_enables() {
        let mut conversation = Conversation::new();
        conversation.begin_send("Hello").unwrap();
        conversation.fail();

        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(conversation.messages()[1].sender, Sender::Bot);
        assert_eq!(
            conversation.messages()[1].text,
            "Sorry, there was an error processing your request."
        );
        assert!(!conversation.in_flight());
        assert!(conversation.can_send("again"));
    }

    #[test]
    fn test_hello_round_trip_scenario() {
        let mut conversation = Conversation::new();

        let posted = conversation.begin_send("Hello").unwrap();
        assert_eq!(posted, "Hello");
        assert_eq!(conversation.messages().len(), 1);

        conversation.complete("Hi there".to_string());
        let log: Vec<(Sender, &str)> = conversation
            .messages()
            .iter()
            .map(|message| (message.sender, message.text.as_str()))
            .collect();
        assert_eq!(log, vec![(Sender::User, "Hello"), (Sender::Bot, "Hi there")]);
    }

    #[test]
    fn test_accepted_send_clears_draft() {
        let mut conversation = Conversation::new();
        let mut draft = "  Hello  ".to_string();

        let posted = submit_draft(&mut conversation, &mut draft);

        assert_eq!(posted.as_deref(), Some("Hello"));
        assert!(draft.is_empty());
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn test_rejected_send_leaves_draft_unchanged() {
        let mut conversation = Conversation::new();
        let mut draft = "   ".to_string();

        assert_eq!(submit_draft(&mut conversation, &mut draft), None);
        assert_eq!(draft, "   ");
        assert!(conversation.messages().is_empty());

        // A send refused by the in-flight gate must not eat the draft either
        conversation.begin_send("first").unwrap();
        let mut draft = "second".to_string();
        assert_eq!(submit_draft(&mut conversation, &mut draft), None);
        assert_eq!(draft, "second");
    }

    #[test]
    fn test_default_config_posts_to_chat_route() {
        assert_eq!(ChatConfig::default().endpoint, "/chat");
    }
}
