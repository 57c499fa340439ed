//! Loading indicators

use leptos::prelude::*;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-1 ml-1">
            <span class="w-1.5 h-1.5 bg-blue-400 rounded-full dot-bounce-1"></span>
            <span class="w-1.5 h-1.5 bg-blue-400 rounded-full dot-bounce-2"></span>
            <span class="w-1.5 h-1.5 bg-blue-400 rounded-full dot-bounce-3"></span>
        </span>
    }
}

/// Placeholder bubble shown while a reply is pending
#[component]
pub fn TypingIndicator(
    /// DOM id, used as the scroll anchor
    id: String,
    /// Text shown before the dots
    label: String,
) -> impl IntoView {
    view! {
        <div id=id class="typing-indicator flex items-start gap-3 message-appear" aria-live="polite">
            <div class="px-4 py-3 bg-slate-800 text-slate-400 rounded-2xl rounded-tl-sm text-sm">
                {label}
                <LoadingDots />
            </div>
        </div>
    }
}
