//! Chat Page - input, send control, and message log for one conversation
//!
//! Owns the draft input and the send flow; rendering of the log lives in
//! the [`ChatLog`] component.

use leptos::prelude::*;

use crate::components::ChatLog;
use crate::services::chat::send_chat_message;
use crate::state::chat::{submit_draft, use_chat_context, ChatConfig};

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat_ctx = use_chat_context();
    let config = use_context::<ChatConfig>().unwrap_or_default();

    let (draft, set_draft) = signal(String::new());

    // Single gate for both triggers: non-blank draft and no request in flight
    let can_send = move || chat_ctx.can_send(&draft.get());

    let submit = move || {
        // submit_draft re-checks the gate, so a disabled Enter press or a
        // click raced against an in-flight request is a no-op and leaves
        // the draft alone.
        let mut current = draft.get_untracked();
        let mut posted = None;
        chat_ctx
            .conversation
            .update(|conversation| posted = submit_draft(conversation, &mut current));
        let Some(text) = posted else {
            return;
        };
        set_draft.set(current);

        let endpoint = config.endpoint.clone();
        leptos::task::spawn_local(async move {
            match send_chat_message(&endpoint, &text).await {
                Ok(reply) => chat_ctx.complete(reply),
                Err(error) => {
                    log::warn!("chat send failed: {error}");
                    chat_ctx.fail();
                }
            }
        });
    };

    let submit_on_enter = submit.clone();

    view! {
        <div class="chat-widget">
            <ChatLog/>
            <div class="chat-composer">
                <input
                    type="text"
                    class="chat-input"
                    placeholder="Type a message..."
                    prop:value=draft
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit_on_enter();
                        }
                    }
                />
                <button
                    class="btn chat-send"
                    disabled=move || !can_send()
                    on:click=move |_| submit()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
