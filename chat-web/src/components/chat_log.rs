//! Message log and bubble components

use leptos::html::Div;
use leptos::prelude::*;

use crate::state::chat::{use_chat_context, ChatMessage, Sender};

/// Scrolling message log.
///
/// Follows the newest message: whenever the conversation grows, the
/// container is scrolled to its bottom so the latest bubble is visible.
#[component]
pub fn ChatLog() -> impl IntoView {
    let chat_ctx = use_chat_context();
    let log_ref: NodeRef<Div> = NodeRef::new();

    // Re-runs after every conversation change, once the DOM is updated
    Effect::new(move || {
        let _ = chat_ctx.message_count();
        if let Some(log) = log_ref.get() {
            log.set_scroll_top(log.scroll_height());
        }
    });

    view! {
        <div class="chat-log" node_ref=log_ref>
            <For
                each={move || chat_ctx.messages().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(index, _)| *index
                children=|(_, message)| view! { <MessageBubble message/> }
            />
        </div>
    }
}

/// One message bubble, styled by sender.
///
/// Text is interpolated as a text node, so markup in either the user input
/// or the bot reply renders inert instead of being injected into the page.
#[component]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (row_class, bubble_class) = match message.sender {
        Sender::User => ("chat chat-end", "chat-bubble chat-bubble-user"),
        Sender::Bot => ("chat chat-start", "chat-bubble chat-bubble-bot"),
    };

    view! {
        <div class=row_class>
            <div class=bubble_class>{message.text}</div>
        </div>
    }
}
