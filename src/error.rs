use thiserror::Error;

/// Everything that can go wrong between the composer and the completion service.
///
/// None of these are fatal: transport-side errors become an error bubble in the
/// conversation, parameter errors reject the submission before anything is recorded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("Failed to reach completion service: {0}")]
    Transport(String),

    #[error("Completion service timed out")]
    Timeout,

    /// Any non-2xx response. The body is deliberately not surfaced.
    #[error("Failed to send message")]
    Status(u16),

    #[error("Invalid response from completion service: {0}")]
    Decode(String),

    #[error("Invalid {field} value: {value:?}")]
    MalformedParameter { field: &'static str, value: String },

    #[error("No request in flight")]
    NoRequestInFlight,
}

impl ChatError {
    /// Errors that count as a failed exchange with the service.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ChatError::Transport(_) | ChatError::Timeout | ChatError::Status(_) | ChatError::Decode(_)
        )
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return ChatError::Timeout;
        }
        if let Some(status) = err.status() {
            return ChatError::Status(status.as_u16());
        }
        ChatError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Decode(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;
