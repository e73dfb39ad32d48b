// src/widget/mod.rs
//
// Headless conversation widget: message history, language selection, and the
// session identifier live here; rendering is left to the embedder.
pub mod conversation;
pub mod language;
pub mod session_store;
pub mod transport;

pub use conversation::{Author, ChatMessage, Conversation, SEND_FAILURE_REPLY};
pub use language::{LanguageOption, SUPPORTED_LANGUAGES};
pub use session_store::{FileStore, KeyValueStore, MemoryStore, get_or_create_session_id};
pub use transport::{HttpRelayTransport, RelayTransport, TransportError};
