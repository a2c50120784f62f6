use crate::ai::CompletionBackend;
use crate::error::ChatResult;
use crate::params::ParameterModel;
use crate::store::ConversationStore;

/// Headless chat driver: one store, one parameter model, one backend.
///
/// `send` runs a full turn. Holding `&mut self` across the await is what keeps
/// a second turn from starting before the first one is recorded.
pub struct ChatSession<B> {
    store: ConversationStore,
    params: ParameterModel,
    backend: B,
}

impl<B: CompletionBackend> ChatSession<B> {
    pub fn new(backend: B) -> Self {
        Self::with_params(backend, ParameterModel::default())
    }

    pub fn with_params(backend: B, params: ParameterModel) -> Self {
        Self {
            store: ConversationStore::new(),
            params,
            backend,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn params(&self) -> &ParameterModel {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ParameterModel {
        &mut self.params
    }

    /// Blank text is ignored. Malformed parameters reject the turn before anything
    /// is recorded; service failures end up in the conversation as an error bubble.
    pub async fn send(&mut self, text: &str) -> ChatResult<()> {
        if !self.store.accepts(text) {
            return Ok(());
        }

        let snapshot = self.params.snapshot()?;
        let Some(request) = self.store.submit(text, &snapshot) else {
            return Ok(());
        };

        let outcome = self.backend.complete(&request).await;
        self.store.resolve(outcome)
    }
}
