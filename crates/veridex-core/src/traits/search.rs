use crate::errors::VeridexResult;
use crate::models::RawArticle;

/// Web search provider returning candidate articles for a query.
pub trait ISearchProvider: Send + Sync {
    /// Run the query and return articles in result order, `rank` assigned
    /// 1-based across result pages.
    fn search(&self, query: &str) -> VeridexResult<Vec<RawArticle>>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
