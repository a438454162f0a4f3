//! Claim translation.
//!
//! Deployments wired to a translation service implement [`ITranslator`]
//! against it; everywhere else the passthrough keeps claims as-is, which
//! is correct for monolingual corpora.

use veridex_core::errors::VeridexResult;
use veridex_core::traits::ITranslator;

#[derive(Debug, Default)]
pub struct PassthroughTranslator;

impl ITranslator for PassthroughTranslator {
    fn translate(&self, text: &str) -> VeridexResult<String> {
        Ok(text.trim().to_string())
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}
