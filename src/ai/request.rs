use crate::error::ChatResult;
use crate::params::{ParameterSnapshot, ReasoningEffort};
use serde::{Deserialize, Serialize};

/// Substituted when the service answers without `message` or `content`.
pub const NO_RESPONSE: &str = "No response";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub input: String,
    pub params: CompletionParams,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletionParams {
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    pub reasoning_effort: ReasoningEffort,
}

/// Map one user message and a parameter snapshot onto the wire payload.
/// Only the latest message is sent; no prior turns.
pub fn build_request(message: &str, snapshot: &ParameterSnapshot) -> CompletionRequest {
    CompletionRequest {
        input: message.to_string(),
        params: CompletionParams {
            temperature: snapshot.temperature,
            top_p: snapshot.top_p,
            top_k: snapshot.top_k,
            reasoning_effort: snapshot.reasoning_effort,
        },
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    message: Option<serde_json::Value>,
    #[serde(default)]
    content: Option<serde_json::Value>,
}

/// Reply text for a field, or `None` when it is absent, null, `false`, `0` or `""`.
/// Strings are taken as-is; other values are rendered as JSON text.
fn non_empty(value: Option<serde_json::Value>) -> Option<String> {
    use serde_json::Value;

    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Pull the reply text out of a success body. The first non-empty of `message`
/// and `content` wins; neither yields [`NO_RESPONSE`]. A body that is not a JSON
/// object is an error.
pub fn extract_reply(body: &str) -> ChatResult<String> {
    let parsed = serde_json::from_str::<CompletionResponse>(body)?;
    Ok(non_empty(parsed.message)
        .or_else(|| non_empty(parsed.content))
        .unwrap_or_else(|| NO_RESPONSE.to_string()))
}
