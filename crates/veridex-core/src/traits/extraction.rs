use crate::errors::VeridexResult;
use crate::models::ExtractedArticle;

/// One article-extraction strategy. Strategies are tried in chain order;
/// the first success wins.
pub trait IArticleExtractor: Send + Sync {
    /// Fetch the URL and recover title and body text.
    fn extract(&self, url: &str) -> VeridexResult<ExtractedArticle>;

    /// Strategy name, recorded on the extracted article.
    fn name(&self) -> &str;
}
