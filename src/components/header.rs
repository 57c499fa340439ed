//! Header component

use leptos::prelude::*;
use crate::state::Conversation;

/// Panel header with the conversation reset button
#[component]
pub fn Header(title: String, reset_label: String) -> impl IntoView {
    let conversation = expect_context::<RwSignal<Conversation>>();

    let is_empty = Signal::derive(move || conversation.with(Conversation::is_empty));

    view! {
        <header class="header h-14 sticky top-0 z-40 border-b border-slate-700 bg-slate-900/80 backdrop-blur-sm">
            <div class="h-full px-4 flex items-center justify-between">
                <h1 class="text-lg font-semibold">{title}</h1>

                <button
                    on:click=move |_| {
                        tracing::debug!("Conversation reset");
                        conversation.update(Conversation::reset);
                    }
                    disabled=move || is_empty.get()
                    class="btn btn-ghost text-sm disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {reset_label}
                </button>
            </div>
        </header>
    }
}
