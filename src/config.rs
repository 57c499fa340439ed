//! Widget configuration and localized copy
//!
//! The host page may embed a JSON block to configure the widget:
//!
//! ```html
//! <script type="application/json" id="chat-widget-config">
//!   { "endpoint": "/api/ask", "locale": "id" }
//! </script>
//! ```
//!
//! Every field is optional; a missing block yields the defaults.

use serde::Deserialize;

/// Element id of the inline configuration block
pub const CONFIG_ELEMENT_ID: &str = "chat-widget-config";

const DEFAULT_ENDPOINT: &str = "/api/ask";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid widget config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Language of the built-in copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    /// Indonesian
    Id,
}

/// Per-string overrides; unset fields fall back to the locale's copy
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StringOverrides {
    pub title: Option<String>,
    pub reset: Option<String>,
    pub typing: Option<String>,
    pub placeholder: Option<String>,
    pub send: Option<String>,
    pub hint: Option<String>,
    pub application_error: Option<String>,
    pub connection_error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// URL the query is POSTed to
    pub endpoint: String,
    pub locale: Locale,
    pub strings: StringOverrides,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            locale: Locale::default(),
            strings: StringOverrides::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the inline config block from the current document.
    ///
    /// Falls back to defaults when the block is missing or malformed.
    pub fn load() -> Self {
        let Some(raw) = read_config_block() else {
            tracing::debug!("No #{} block, using default config", CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Resolved copy for the configured locale with overrides applied
    pub fn strings(&self) -> Strings {
        let base = Strings::for_locale(self.locale);
        let o = &self.strings;
        Strings {
            title: o.title.clone().unwrap_or(base.title),
            reset: o.reset.clone().unwrap_or(base.reset),
            typing: o.typing.clone().unwrap_or(base.typing),
            placeholder: o.placeholder.clone().unwrap_or(base.placeholder),
            send: o.send.clone().unwrap_or(base.send),
            hint: o.hint.clone().unwrap_or(base.hint),
            application_error: o.application_error.clone().unwrap_or(base.application_error),
            connection_error: o.connection_error.clone().unwrap_or(base.connection_error),
        }
    }
}

fn read_config_block() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|s| !s.trim().is_empty())
}

/// User-facing copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    pub title: String,
    /// Clears the conversation
    pub reset: String,
    /// Label shown before the animated dots
    pub typing: String,
    pub placeholder: String,
    pub send: String,
    pub hint: String,
    pub application_error: String,
    pub connection_error: String,
}

impl Strings {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                title: "Assistant".to_string(),
                reset: "New chat".to_string(),
                typing: "Typing".to_string(),
                placeholder: "Type your question...".to_string(),
                send: "Send".to_string(),
                hint: "Press Enter to send, Shift+Enter for a new line".to_string(),
                application_error: "Sorry, an error occurred. Please try again.".to_string(),
                connection_error: "Sorry, a connection error occurred. Please try again."
                    .to_string(),
            },
            Locale::Id => Self {
                title: "Asisten".to_string(),
                reset: "Percakapan baru".to_string(),
                typing: "Mengetik".to_string(),
                placeholder: "Ketik pertanyaan Anda...".to_string(),
                send: "Kirim".to_string(),
                hint: "Tekan Enter untuk mengirim, Shift+Enter untuk baris baru".to_string(),
                application_error: "Maaf, terjadi kesalahan. Silakan coba lagi.".to_string(),
                connection_error: "Maaf, terjadi kesalahan dalam koneksi. Silakan coba lagi."
                    .to_string(),
            },
        }
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
