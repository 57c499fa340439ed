//! Message and wire types for the chat widget

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/ask`
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub query: String,
}

/// Raw response from `/api/ask`.
///
/// Both fields are optional on the wire: a successful reply carries a string
/// `answer`, a failed one carries `error` (any truthy JSON value). Fields are
/// kept as raw JSON so a failed reply is recognized whatever else it holds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl AskResponse {
    /// Whether the backend flagged this reply as failed
    pub fn is_error(&self) -> bool {
        self.error.as_ref().is_some_and(is_truthy)
    }
}

/// JSON truthiness as the browser sees it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Failure of a single ask round-trip
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AskError {
    /// The backend answered but reported a failure
    #[error("Application error: {0}")]
    Application(String),

    /// No well-formed response could be obtained
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    System,
}

impl Origin {
    /// CSS class used for the bubble
    pub fn class(self) -> &'static str {
        match self {
            Origin::User => "user",
            Origin::System => "system",
        }
    }
}

/// A rendered chat message. Never mutated once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub origin: Origin,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Message {
    fn new(origin: Origin, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            origin,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Origin::User, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Origin::System, content)
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}
