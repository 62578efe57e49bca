pub mod article;
pub mod reader;
pub mod stats;

// Re-export main types for convenient access
pub use article::{
    explain, is_likely_initialism, resolve_article, resolve_article_opt, with_article,
    Article, ArticleResolver, Reason, Resolution,
};

// Re-export batch processing utilities used by the CLI
pub use reader::{PhraseReader, ReadStats, ReaderConfig};
pub use stats::RunStats;
