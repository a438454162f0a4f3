//! Frequency-based extractive summarizer.

use std::collections::HashMap;

use veridex_core::config::defaults;
use veridex_core::errors::{PipelineError, VeridexResult};
use veridex_core::traits::ISummarizer;

use crate::query;
use crate::summarize::split_sentences;

/// Scores each sentence by the document-wide frequency of its content
/// words and keeps the best ones in their original order.
pub struct ExtractiveSummarizer {
    max_sentences: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self {
            max_sentences: defaults::DEFAULT_EXTRACTIVE_SENTENCES,
        }
    }
}

impl ExtractiveSummarizer {
    pub fn new(max_sentences: usize) -> Self {
        Self { max_sentences }
    }
}

impl ISummarizer for ExtractiveSummarizer {
    fn summarize(&self, text: &str) -> VeridexResult<String> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Err(PipelineError::SummarizationFailed {
                reason: "no sentences to score".to_string(),
            }
            .into());
        }
        if sentences.len() <= self.max_sentences {
            return Ok(sentences.join(" "));
        }

        let mut frequencies: HashMap<String, usize> = HashMap::new();
        for word in query::content_keywords(text) {
            *frequencies.entry(word).or_insert(0) += 1;
        }

        let mut ranked: Vec<(usize, usize)> = sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                let score = query::content_keywords(sentence)
                    .iter()
                    .map(|word| frequencies.get(word).copied().unwrap_or(0))
                    .sum();
                (index, score)
            })
            .collect();

        // Highest score first; ties resolved toward earlier sentences.
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut keep: Vec<usize> = ranked
            .into_iter()
            .take(self.max_sentences)
            .map(|(index, _)| index)
            .collect();
        keep.sort_unstable();

        Ok(keep
            .into_iter()
            .map(|index| sentences[index])
            .collect::<Vec<_>>()
            .join(" "))
    }

    fn name(&self) -> &str {
        "extractive-frequency"
    }
}
