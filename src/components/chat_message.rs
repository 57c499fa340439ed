//! Chat message component

use leptos::prelude::*;
use crate::types::Message;

/// Render a single chat message bubble
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.is_user();

    view! {
        <div
            id=message.id.clone()
            class=format!(
                "message {} flex items-start gap-3 message-appear {}",
                message.origin.class(),
                if is_user { "flex-row-reverse" } else { "" }
            )
        >
            <div class=format!(
                "flex flex-col gap-1 max-w-[80%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                <div class=format!(
                    "message-content px-4 py-3 rounded-2xl whitespace-pre-wrap break-words {}",
                    if is_user {
                        "bg-blue-600 text-white rounded-tr-sm"
                    } else {
                        "bg-slate-800 text-slate-100 rounded-tl-sm"
                    }
                )>
                    {message.content.clone()}
                </div>

                <span class="text-xs text-slate-600 mt-1">
                    {message.timestamp.format("%H:%M").to_string()}
                </span>
            </div>
        </div>
    }
}
