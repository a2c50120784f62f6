/// Completion service plumbing.
///
/// - `request` - wire payload building and reply parsing (pure)
/// - `client` - the `CompletionBackend` seam and its HTTP implementation
mod client;
mod request;

pub use client::{CompletionBackend, HttpCompletionClient};
pub use request::{CompletionParams, CompletionRequest, NO_RESPONSE, build_request, extract_reply};
