use crate::errors::VeridexResult;

/// Claim translator. The pipeline translates claims to its canonical
/// language before stance classification; deployments without a translation
/// service use the passthrough implementation.
pub trait ITranslator: Send + Sync {
    /// Translate the text to the pipeline's canonical language.
    fn translate(&self, text: &str) -> VeridexResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
