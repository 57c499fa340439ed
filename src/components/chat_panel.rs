//! The chat panel: message list, typing indicator and input

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api::HttpBackend;
use crate::components::{ChatInput, ChatMessage, TypingIndicator};
use crate::config::WidgetConfig;
use crate::controller::{ChatController, Resolution};
use crate::state::{Conversation, SubmitError};

/// Mounted chat panel bound to one conversation
#[component]
pub fn ChatPanel(
    config: WidgetConfig,
    /// Conversation to render; owned by the caller so it can be reset
    conversation: RwSignal<Conversation>,
) -> impl IntoView {
    let strings = config.strings();
    let controller = ChatController::new(
        HttpBackend::new(config.endpoint.clone()),
        strings.clone(),
    );

    let input = RwSignal::new(String::new());
    let busy = Signal::derive(move || conversation.with(Conversation::is_awaiting_reply));

    // Keep the newest entry in view after every change
    Effect::new(move |_| {
        if let Some(id) = conversation.with(|c| c.tail_id().map(str::to_string)) {
            request_animation_frame(move || scroll_into_view(&id));
        }
    });

    let on_submit = move || {
        let controller = controller.clone();
        spawn_local(async move {
            match controller.submit(&conversation, &input).await {
                Ok(Resolution::Answered) => tracing::debug!("Reply rendered"),
                Ok(resolution) => tracing::debug!("Submission resolved: {:?}", resolution),
                Err(SubmitError::Empty) => {}
                Err(e) => tracing::info!("Submission ignored: {}", e),
            }
        });
    };

    let typing_label = strings.typing.clone();

    view! {
        <div class="chat-panel flex flex-col h-full bg-slate-900 text-slate-100">
            <div id="chatMessages" class="chat-messages flex-1 overflow-y-auto p-4 space-y-4">
                <For
                    each=move || conversation.with(|c| c.messages().to_vec())
                    key=|message| message.id.clone()
                    children=|message| view! { <ChatMessage message=message /> }
                />

                {move || {
                    conversation.with(|c| c.pending().map(|p| p.id.clone())).map(|id| {
                        view! { <TypingIndicator id=id label=typing_label.clone() /> }
                    })
                }}
            </div>

            <ChatInput
                value=input
                on_submit=on_submit
                busy=busy
                placeholder=strings.placeholder.clone()
                send_label=strings.send.clone()
                hint=strings.hint.clone()
            />
        </div>
    }
}

/// Scroll the rendered entry with DOM id `id` into view
fn scroll_into_view(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
