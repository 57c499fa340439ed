//! Conversation view state

use crate::types::Message;

/// Submission number handed out by [`Conversation::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// The "typing" placeholder for the one in-flight request
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReply {
    /// DOM key for the indicator bubble
    pub id: String,
    pub ticket: Ticket,
}

/// Why a submission was refused before any request went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Query is empty")]
    Empty,

    #[error("A reply is still pending")]
    InFlight,

    #[error("Chat panel is no longer mounted")]
    Detached,
}

/// Ordered, append-only list of messages plus at most one pending reply.
///
/// Lives for the page session; [`Conversation::reset`] returns it to the
/// initial state.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    pending: Option<PendingReply>,
    next_ticket: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn pending(&self) -> Option<&PendingReply> {
        self.pending.as_ref()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.pending.is_none()
    }

    /// Start a submission cycle: append the user's message and show the
    /// typing indicator after it.
    pub fn begin(&mut self, query: &str) -> Result<Ticket, SubmitError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SubmitError::Empty);
        }
        if self.pending.is_some() {
            return Err(SubmitError::InFlight);
        }

        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);

        self.messages.push(Message::user(query));
        self.pending = Some(PendingReply {
            id: uuid::Uuid::new_v4().to_string(),
            ticket,
        });
        Ok(ticket)
    }

    /// Finish a submission cycle: drop the indicator and append the reply.
    ///
    /// Returns `None` without touching anything when `ticket` is not the
    /// pending one, e.g. the conversation was reset in the meantime.
    pub fn settle(&mut self, ticket: Ticket, reply: impl Into<String>) -> Option<&Message> {
        if self.pending.as_ref().map(|p| p.ticket) != Some(ticket) {
            return None;
        }

        self.pending = None;
        self.messages.push(Message::system(reply));
        self.messages.last()
    }

    /// DOM id of the newest rendered entry; the panel scrolls it into view.
    pub fn tail_id(&self) -> Option<&str> {
        match &self.pending {
            Some(pending) => Some(pending.id.as_str()),
            None => self.messages.last().map(|m| m.id.as_str()),
        }
    }

    /// Clear all messages and any pending indicator.
    ///
    /// Tickets keep counting so replies to pre-reset submissions are
    /// recognized as stale.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.pending = None;
    }
}
