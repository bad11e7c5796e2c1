//! Chat Widget Web App - root Leptos component

use leptos::prelude::*;

use crate::pages::ChatPage;
use crate::state::chat::{provide_chat_context, ChatConfig};

#[component]
pub fn App() -> impl IntoView {
    // Conversation state and widget configuration, shared via context
    provide_chat_context();
    provide_context(ChatConfig::default());

    view! {
        <div class="app-container">
            <header class="chat-header">
                <span class="chat-title">"Chat"</span>
            </header>
            <ChatPage/>
        </div>
    }
}
