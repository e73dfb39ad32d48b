// src/widget/conversation.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::language::{LanguageOption, default_language, find};
use super::session_store::{KeyValueStore, get_or_create_session_id};
use super::transport::{RelayTransport, TransportError};

/// Shown in place of a reply when the relay cannot be reached at all.
pub const SEND_FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again later.\n\n*This is general information.*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub author: Author,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(author: Author, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            author,
            timestamp: Utc::now(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self::new(Author::User, content)
    }

    fn assistant(content: impl Into<String>) -> Self {
        Self::new(Author::Assistant, content)
    }
}

pub type ErrorCallback = Box<dyn Fn(&TransportError) + Send + Sync>;

/// In-memory conversation state behind the chat widget. History lives only
/// here; a reload starts over with the welcome message, while the session
/// identifier survives in the injected store.
pub struct Conversation {
    messages: Vec<ChatMessage>,
    session_id: String,
    language: &'static LanguageOption,
    transport: Arc<dyn RelayTransport>,
    on_error: Option<ErrorCallback>,
    open: bool,
    loading: bool,
}

impl Conversation {
    /// Builds a conversation seeded with the default-language welcome
    /// message. The session identifier is read from (or lazily written to)
    /// the store.
    pub fn new(store: &mut dyn KeyValueStore, transport: Arc<dyn RelayTransport>) -> Self {
        let session_id = get_or_create_session_id(store);
        let language = default_language();
        Self {
            messages: vec![ChatMessage::assistant(language.welcome)],
            session_id,
            language,
            transport,
            on_error: None,
            open: false,
            loading: false,
        }
    }

    /// Injects a callback invoked with the causing error on failed sends.
    pub fn on_error(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    /// Appends the user message synchronously, then performs one relay round
    /// trip. Blank input is a no-op, and so is sending while a request is
    /// already outstanding (the input is disabled while loading).
    pub async fn send_message(&mut self, text: &str) {
        if text.trim().is_empty() || self.loading {
            return;
        }

        self.messages.push(ChatMessage::user(text));
        self.loading = true;

        let result = self
            .transport
            .send(text, &self.session_id, Some(self.language.code))
            .await;

        match result {
            Ok(response) => {
                self.messages.push(ChatMessage::assistant(response.reply));
            }
            Err(err) => {
                self.messages.push(ChatMessage::assistant(SEND_FAILURE_REPLY));
                if let Some(callback) = &self.on_error {
                    callback(&err);
                }
            }
        }
        self.loading = false;
    }

    /// Resets history to a single welcome message in the active language.
    /// The session identifier is untouched.
    pub fn clear_history(&mut self) {
        self.messages = vec![ChatMessage::assistant(self.language.welcome)];
    }

    /// Switches the active language. Existing messages are not translated;
    /// only future welcome messages and relay hints change. Returns false
    /// for codes outside the fixed table.
    pub fn set_language(&mut self, code: &str) -> bool {
        match find(code) {
            Some(language) => {
                self.language = language;
                true
            }
            None => false,
        }
    }

    /// Visibility toggle only; message state and in-flight requests are
    /// unaffected.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn language(&self) -> &'static LanguageOption {
        self.language
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
