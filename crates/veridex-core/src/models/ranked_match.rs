use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An admitted article ranked by semantic similarity to the claim.
///
/// Ordering invariant: any collection of ranked matches produced by the
/// relevance filter is sorted by `similarity` descending, ties in the
/// original (credibility-admitted) order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedMatch {
    pub title: String,
    pub url: String,
    /// Cosine similarity between claim and title embeddings, in [0,1].
    pub similarity: f64,
}
