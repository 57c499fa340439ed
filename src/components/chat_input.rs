//! Chat input component

use leptos::prelude::*;
use web_sys::HtmlTextAreaElement;

use crate::controller::is_submit_key;

const MAX_HEIGHT_PX: i32 = 200;

/// Chat input form with auto-resize textarea
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called on every submit intent (button, form submit or Enter)
    on_submit: impl Fn() + 'static + Clone,
    /// Whether a reply is pending
    #[prop(into)]
    busy: Signal<bool>,
    placeholder: String,
    send_label: String,
    hint: String,
) -> impl IntoView {
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let _ = el.set_attribute("style", "height: auto;");
            let new_height = el.scroll_height().min(MAX_HEIGHT_PX);
            let _ = el.set_attribute(
                "style",
                &format!("height: {}px; max-height: {}px;", new_height, MAX_HEIGHT_PX),
            );
        }
    };

    let on_input = move |ev: web_sys::Event| {
        value.set(event_target_value(&ev));
        resize_textarea();
    };

    // Enter submits, Shift+Enter inserts a newline
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if is_submit_key(
                &ev.key(),
                ev.shift_key(),
                ev.ctrl_key(),
                ev.alt_key(),
                ev.meta_key(),
                ev.is_composing(),
            ) {
                ev.prevent_default();
                on_submit();
            }
        }
    };

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit();
    };

    let is_empty = Signal::derive(move || value.get().trim().is_empty());

    view! {
        <form
            id="chatForm"
            on:submit=on_form_submit
            class="border-t border-slate-700 p-4 bg-slate-800/50 backdrop-blur-sm"
        >
            <div class="flex items-end gap-3">
                <div class="flex-1 relative">
                    <textarea
                        id="userInput"
                        node_ref=textarea_ref
                        prop:value=move || value.get()
                        on:input=on_input
                        on:keydown=on_keydown
                        placeholder=placeholder
                        rows="1"
                        class="w-full px-4 py-3 bg-slate-900 border border-slate-700 rounded-xl resize-none
                               text-slate-100 placeholder-slate-500
                               focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                        style="max-height: 200px;"
                    ></textarea>
                </div>

                <button
                    type="submit"
                    disabled=move || busy.get() || is_empty.get()
                    aria-label=send_label.clone()
                    title=send_label
                    class="p-3 bg-blue-600 hover:bg-blue-700 disabled:bg-slate-700
                           disabled:cursor-not-allowed rounded-xl transition-colors
                           focus:outline-none focus:ring-2 focus:ring-blue-500"
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="w-5 h-5 text-white"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <line x1="22" y1="2" x2="11" y2="13"></line>
                        <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                    </svg>
                </button>
            </div>

            <p class="text-xs text-slate-500 mt-2 text-center">{hint}</p>
        </form>
    }
}
