use super::request::{CompletionRequest, extract_reply};
use crate::config::ClientConfig;
use crate::error::{ChatError, ChatResult};
use async_trait::async_trait;
use reqwest::Client;

/// Anything that can turn a completion request into reply text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> ChatResult<String>;
}

/// Completion service reached over HTTP. One POST per message, bounded by the
/// configured timeout; no retries.
#[derive(Clone, Debug)]
pub struct HttpCompletionClient {
    client: Client,
    endpoint: String,
}

impl HttpCompletionClient {
    pub fn new(config: &ClientConfig) -> ChatResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionBackend for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> ChatResult<String> {
        tracing::debug!(endpoint = %self.endpoint, "posting completion request");
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "completion endpoint returned an error status");
            return Err(ChatError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        extract_reply(&body)
    }
}
