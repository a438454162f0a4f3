pub mod embedding;
pub mod extraction;
pub mod nli;
pub mod search;
pub mod summarize;
pub mod translate;

pub use embedding::IEmbeddingProvider;
pub use extraction::IArticleExtractor;
pub use nli::INliProvider;
pub use search::ISearchProvider;
pub use summarize::ISummarizer;
pub use translate::ITranslator;
