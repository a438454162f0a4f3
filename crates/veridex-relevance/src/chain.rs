//! Embedding provider fallback chain.
//!
//! Providers are tried in priority order; the first available one that
//! succeeds wins. Falling past the primary records a degradation event so
//! sessions can report which quality tier actually served them.

use tracing::warn;

use veridex_core::errors::{RelevanceError, VeridexError, VeridexResult};
use veridex_core::models::DegradationEvent;
use veridex_core::traits::IEmbeddingProvider;

/// Ordered fallback chain over embedding providers.
pub struct ProviderChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
    events: Vec<DegradationEvent>,
}

impl Default for ProviderChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderChain {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Append a provider at the lowest priority so far.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.providers.push(provider);
    }

    /// Embed one text through the chain. Returns the vector and the name
    /// of the provider that produced it.
    pub fn embed(&mut self, text: &str) -> VeridexResult<(Vec<f32>, &str)> {
        self.run(|p| p.embed(text))
    }

    /// Embed a batch through the chain. The whole batch comes from a
    /// single provider; a provider that fails mid-batch forfeits the batch
    /// to the next provider.
    pub fn embed_batch(&mut self, texts: &[String]) -> VeridexResult<(Vec<Vec<f32>>, &str)> {
        self.run(|p| p.embed_batch(texts))
    }

    fn run<T>(
        &mut self,
        op: impl Fn(&dyn IEmbeddingProvider) -> VeridexResult<T>,
    ) -> VeridexResult<(T, &str)> {
        let mut last_error: Option<VeridexError> = None;

        for i in 0..self.providers.len() {
            if !self.providers[i].is_available() {
                continue;
            }

            match op(self.providers[i].as_ref()) {
                Ok(value) => {
                    if i > 0 {
                        let primary = self.providers[0].name().to_string();
                        let winner = self.providers[i].name().to_string();
                        let reason = last_error
                            .as_ref()
                            .map(|e| e.to_string())
                            .unwrap_or_else(|| "primary unavailable".to_string());
                        self.events
                            .push(DegradationEvent::now(primary, winner, reason));
                    }
                    return Ok((value, self.providers[i].name()));
                }
                Err(e) => {
                    warn!(
                        provider = self.providers[i].name(),
                        error = %e,
                        "embedding provider failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| RelevanceError::AllProvidersFailed.into()))
    }

    /// Name of the first available provider, "none" when the chain is down.
    pub fn active_provider_name(&self) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Drain degradation events accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<DegradationEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
