//! Hashed-feature fallback embedding provider.
//!
//! Maps terms into fixed-dimension buckets via blake3 with signed
//! accumulation, weighted by sublinear term frequency. Far weaker than a
//! neural model but deterministic, dependency-free at runtime, and always
//! available, the guaranteed floor of the provider chain.

use std::collections::HashMap;

use veridex_core::errors::VeridexResult;
use veridex_core::traits::IEmbeddingProvider;

/// Deterministic hashed-feature embedding provider.
pub struct HashedEmbeddingProvider {
    dimensions: usize,
}

impl HashedEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Bucket index and sign for a term. The first 8 hash bytes pick the
    /// bucket, the 9th picks the sign; signed accumulation keeps colliding
    /// terms from always reinforcing each other.
    fn bucket(term: &str, dims: usize) -> (usize, f32) {
        let digest = blake3::hash(term.as_bytes());
        let bytes = digest.as_bytes();
        let mut idx: u64 = 0;
        for b in &bytes[..8] {
            idx = (idx << 8) | u64::from(*b);
        }
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        ((idx as usize) % dims, sign)
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut counts: HashMap<&str, f32> = HashMap::new();
        for tok in &tokens {
            *counts.entry(tok.as_str()).or_default() += 1.0;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &counts {
            // Sublinear TF keeps one repeated term from dominating a title.
            let weight = 1.0 + count.ln();
            let (idx, sign) = Self::bucket(term, self.dimensions);
            vec[idx] += sign * weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }

        vec
    }
}

impl IEmbeddingProvider for HashedEmbeddingProvider {
    fn embed(&self, text: &str) -> VeridexResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> VeridexResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-fallback"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::cosine;

    #[test]
    fn empty_text_is_a_zero_vector() {
        let p = HashedEmbeddingProvider::new(64);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn dimensions_are_respected() {
        let p = HashedEmbeddingProvider::new(384);
        assert_eq!(p.embed("some headline text").unwrap().len(), 384);
        assert_eq!(p.dimensions(), 384);
    }

    #[test]
    fn nonempty_output_is_unit_norm() {
        let p = HashedEmbeddingProvider::new(256);
        let v = p.embed("earthquake relief fund confirmed").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn deterministic_across_calls() {
        let p = HashedEmbeddingProvider::new(128);
        assert_eq!(
            p.embed("stable output").unwrap(),
            p.embed("stable output").unwrap()
        );
    }

    #[test]
    fn batch_matches_individual() {
        let p = HashedEmbeddingProvider::new(64);
        let texts = vec!["first headline".to_string(), "second headline".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(text).unwrap());
        }
    }

    #[test]
    fn shared_vocabulary_scores_closer_than_disjoint() {
        let p = HashedEmbeddingProvider::new(256);
        let a = p.embed("prime minister visits flood victims").unwrap();
        let b = p.embed("prime minister tours flood damage").unwrap();
        let c = p.embed("quarterly earnings beat analyst forecasts").unwrap();
        assert!(cosine(&a, &b) > cosine(&a, &c));
    }

    #[test]
    fn always_available() {
        assert!(HashedEmbeddingProvider::new(16).is_available());
    }
}
