use crate::errors::VeridexResult;
use crate::models::NliOutcome;

/// Natural-language-inference classifier provider.
///
/// Callers pass the evidence text as premise and the claim as hypothesis.
pub trait INliProvider: Send + Sync {
    /// Classify the premise/hypothesis pair into entailment, contradiction,
    /// or neutral, with a label probability in [0,1].
    fn classify(&self, premise: &str, hypothesis: &str) -> VeridexResult<NliOutcome>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
