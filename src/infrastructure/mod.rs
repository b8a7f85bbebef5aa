//! Infrastructure layer - In-memory stores, configuration and external services

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod documents;
pub mod ledger;
pub mod store;
pub mod workspace;

pub use analyzer::{build_analyzer, GeminiAnalyzer, TextAnalyzer, UnconfiguredAnalyzer};
pub use catalog::Catalog;
pub use config::{AnalysisSettings, Config};
pub use ledger::SubmissionLedger;
pub use store::{ArticleRepository, InMemoryArticleStore};
pub use workspace::{resolve_config, Workspace};
