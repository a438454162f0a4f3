//! NLI provider fallback chain.
//!
//! Same contract as the embedding chain: providers in priority order,
//! first available success wins, fallbacks past the primary are recorded
//! as degradation events.

use tracing::warn;

use veridex_core::errors::{StanceError, VeridexResult};
use veridex_core::models::{DegradationEvent, NliOutcome};
use veridex_core::traits::INliProvider;

/// Ordered fallback chain over NLI classifiers.
pub struct NliChain {
    providers: Vec<Box<dyn INliProvider>>,
    events: Vec<DegradationEvent>,
}

impl Default for NliChain {
    fn default() -> Self {
        Self::new()
    }
}

impl NliChain {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Append a provider at the lowest priority so far.
    pub fn push(&mut self, provider: Box<dyn INliProvider>) {
        self.providers.push(provider);
    }

    /// Classify a premise/hypothesis pair through the chain. Returns the
    /// outcome and the name of the provider that produced it.
    pub fn classify(
        &mut self,
        premise: &str,
        hypothesis: &str,
    ) -> VeridexResult<(NliOutcome, &str)> {
        let mut last_error = None;

        for i in 0..self.providers.len() {
            let provider = self.providers[i].as_ref();
            if !provider.is_available() {
                continue;
            }

            match provider.classify(premise, hypothesis) {
                Ok(outcome) => {
                    if i > 0 {
                        self.record_fallback(i, last_error.as_ref());
                    }
                    return Ok((outcome, self.providers[i].name()));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "NLI provider failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| StanceError::AllProvidersFailed.into()))
    }

    fn record_fallback(&mut self, winner: usize, error: Option<&veridex_core::VeridexError>) {
        let reason = error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "primary unavailable".to_string());
        self.events.push(DegradationEvent::now(
            self.providers[0].name().to_string(),
            self.providers[winner].name().to_string(),
            reason,
        ));
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
