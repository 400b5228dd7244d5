// file: src/models/search_result.rs
// description: Refined search result with query-relevant highlighted sentences
// reference: derived client-side from an Article after the engine responds

use crate::models::Article;
use serde::{Deserialize, Serialize};

/// An [`Article`] refined against the query that produced it: `sentences`
/// holds the subset of `text` segments that contain the query, each with the
/// query terms wrapped in highlight markers.
///
/// Derived fresh per search and discarded when a new search is issued. An
/// article with no relevant sentence ends up with an empty `sentences` list,
/// which callers must render as an explicit "no relevant sentences" state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub text: String,
    pub url: String,
    pub sentences: Vec<String>,
}

impl SearchResult {
    pub fn new(article: Article, sentences: Vec<String>) -> Self {
        Self {
            title: article.title,
            text: article.text,
            url: article.url,
            sentences,
        }
    }

    pub fn has_relevant_sentences(&self) -> bool {
        !self.sentences.is_empty()
    }

    /// Format as a summary string for terminal display.
    pub fn format_summary(&self) -> String {
        if self.sentences.is_empty() {
            return format!("{}\n{}\n  (no relevant sentences)\n", self.title, self.url);
        }

        let mut summary = format!("{}\n{}\n", self.title, self.url);
        for sentence in &self.sentences {
            summary.push_str(&format!("  - {}\n", sentence.trim()));
        }
        summary
    }
}
