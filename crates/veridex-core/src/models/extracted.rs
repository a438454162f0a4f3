use serde::{Deserialize, Serialize};

/// Article body recovered by the extraction chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub text: String,
    /// Name of the extraction strategy that succeeded.
    pub method: String,
}
