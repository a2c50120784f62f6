pub mod ai;
pub mod config;
pub mod error;
pub mod params;
pub mod session;
pub mod store;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod theme;
#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;

pub use ai::{CompletionBackend, CompletionRequest, HttpCompletionClient, build_request, extract_reply};
pub use config::ClientConfig;
pub use error::{ChatError, ChatResult};
pub use params::{ParameterModel, ParameterSettings, ParameterSnapshot, ReasoningEffort};
pub use session::ChatSession;
pub use store::{ConversationStore, RequestState};
pub use types::{Message, MessageId, Origin};
