//! Cosine similarity over embedding vectors.

/// Cosine similarity between two vectors.
///
/// Zero-norm vectors (and length mismatches beyond the shared prefix)
/// yield 0.0 rather than NaN, so a failed or empty embedding never
/// poisons the ranking.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    if len == 0 {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for i in 0..len {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    dot / denom
}
