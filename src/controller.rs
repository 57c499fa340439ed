//! Submission flow of the chat panel
//!
//! One cycle per submission: `Idle -> Sent -> Resolved -> Idle`. The user's
//! message and the typing indicator go in before the request; the indicator
//! is swapped for exactly one reply when the request settles.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::api::AskBackend;
use crate::config::Strings;
use crate::state::{Conversation, SubmitError};
use crate::types::AskError;

/// Where the conversation lives. Implemented for the reactive signal the
/// panel renders from, and for a plain `RefCell` in tests.
pub trait ConversationStore {
    /// Mutate the conversation; `None` if it no longer exists.
    fn update_conversation<R>(&self, f: impl FnOnce(&mut Conversation) -> R) -> Option<R>;
}

impl ConversationStore for RwSignal<Conversation> {
    fn update_conversation<R>(&self, f: impl FnOnce(&mut Conversation) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl ConversationStore for RefCell<Conversation> {
    fn update_conversation<R>(&self, f: impl FnOnce(&mut Conversation) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// The text field the user types into
pub trait InputField {
    fn read(&self) -> String;
    fn clear(&self);
}

impl InputField for RwSignal<String> {
    fn read(&self) -> String {
        self.get_untracked()
    }

    fn clear(&self) {
        self.set(String::new());
    }
}

impl InputField for RefCell<String> {
    fn read(&self) -> String {
        self.borrow().clone()
    }

    fn clear(&self) {
        self.borrow_mut().clear();
    }
}

/// How a submission cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Answered,
    ApplicationError,
    TransportError,
    /// The conversation was reset or unmounted before the reply arrived
    Discarded,
}

/// Drives submissions against a backend
#[derive(Clone)]
pub struct ChatController<B> {
    backend: B,
    strings: Strings,
}

impl<B: AskBackend> ChatController<B> {
    pub fn new(backend: B, strings: Strings) -> Self {
        Self { backend, strings }
    }

    /// Run one full submission cycle for whatever is in `input`.
    ///
    /// Blank input and submissions while a reply is pending are refused
    /// before anything changes; the input is only cleared once the query
    /// has been accepted.
    pub async fn submit<S, I>(&self, store: &S, input: &I) -> Result<Resolution, SubmitError>
    where
        S: ConversationStore,
        I: InputField,
    {
        let raw = input.read();
        let query = raw.trim();
        if query.is_empty() {
            return Err(SubmitError::Empty);
        }

        let ticket = store
            .update_conversation(|c| c.begin(query))
            .ok_or(SubmitError::Detached)??;
        input.clear();

        tracing::debug!("Sending query ({} chars)", query.len());
        let result = self.backend.ask(query).await;

        let (reply, resolution) = match result {
            Ok(answer) => (answer, Resolution::Answered),
            Err(AskError::Application(detail)) => {
                tracing::warn!("Backend reported an error: {}", detail);
                (self.strings.application_error.clone(), Resolution::ApplicationError)
            }
            Err(AskError::Transport(detail)) => {
                tracing::error!("Ask request failed: {}", detail);
                (self.strings.connection_error.clone(), Resolution::TransportError)
            }
        };

        let settled = store
            .update_conversation(|c| c.settle(ticket, reply).is_some())
            .unwrap_or(false);
        if !settled {
            tracing::debug!("Dropping reply for {:?}, conversation moved on", ticket);
            return Ok(Resolution::Discarded);
        }

        Ok(resolution)
    }
}

/// Enter without modifiers submits; Shift+Enter stays a newline and Enter
/// that confirms an IME composition is left to the input method.
pub fn is_submit_key(
    key: &str,
    shift: bool,
    ctrl: bool,
    alt: bool,
    meta: bool,
    composing: bool,
) -> bool {
    key == "Enter" && !(shift || ctrl || alt || meta || composing)
}
