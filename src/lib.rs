pub mod analyzer;
pub mod config;
pub mod ignore;
pub mod report;
pub mod summarizer;
pub mod walker;

pub use analyzer::{Analyzer, SummaryResult};
pub use config::Config;
pub use ignore::IgnoreRules;
pub use summarizer::Summarizer;

pub type Result<T> = anyhow::Result<T>;
