use crate::config::Config;
use crate::ignore::IgnoreRules;
use crate::summarizer::Summarizer;
use crate::walker;
use anyhow::Result;
use futures::future::join_all;
use std::path::{Path, PathBuf};

/// One summarized file: the path relative to the analyzed root paired with
/// either a model-produced summary or an error string. Every submitted file
/// produces exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub path: PathBuf,
    pub summary: String,
}

/// Drives a summarization run: traversal, concurrent fan-out, collection.
pub struct Analyzer {
    summarizer: Summarizer,
}

impl Analyzer {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            summarizer: Summarizer::new(config)?,
        })
    }

    /// Summarize every candidate file beneath `folder`. All requests are
    /// launched at once and joined together; results come back in input
    /// order regardless of completion order. There is no concurrency cap
    /// (a bounded pool would be an observable-behavior-preserving change,
    /// left as a future option).
    pub async fn analyze_folder(
        &self,
        folder: &Path,
        rules: &IgnoreRules,
        include_all: bool,
    ) -> Vec<SummaryResult> {
        let paths = walker::collect_files(folder, rules, include_all);

        let tasks = paths.iter().map(|relative| {
            let full_path = folder.join(relative);
            async move { self.summarizer.summarize(&full_path).await }
        });
        let summaries = join_all(tasks).await;

        paths
            .into_iter()
            .zip(summaries)
            .map(|(path, summary)| SummaryResult { path, summary })
            .collect()
    }

    /// Summarize a single explicit file, keyed by its base name.
    pub async fn analyze_single_file(&self, file: &Path) -> Vec<SummaryResult> {
        let summary = self.summarizer.summarize(file).await;
        let name = file
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| file.to_path_buf());

        vec![SummaryResult {
            path: name,
            summary,
        }]
    }
}
