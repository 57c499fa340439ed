//! Chat widget - a Leptos panel that posts questions to `/api/ask`
//!
//! Renders user and system messages into a scrolling list, shows a typing
//! indicator while the backend is answering, and turns backend or network
//! failures into a localized apology.

pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod state;
pub mod types;

use leptos::prelude::*;

use components::{ChatPanel, Header};
use config::WidgetConfig;
use state::Conversation;

/// Root component
#[component]
pub fn App() -> impl IntoView {
    let config = WidgetConfig::load();
    tracing::info!(
        "Chat widget starting (endpoint: {}, locale: {:?})",
        config.endpoint,
        config.locale
    );

    let strings = config.strings();
    let conversation = RwSignal::new(Conversation::new());
    provide_context(conversation);

    view! {
        <main class="h-screen flex flex-col">
            <Header title=strings.title reset_label=strings.reset />
            <div class="flex-1 min-h-0">
                <ChatPanel config=config conversation=conversation />
            </div>
        </main>
    }
}
