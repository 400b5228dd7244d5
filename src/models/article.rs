// file: src/models/article.rs
// description: Encyclopedia article model as returned by the search engine
// reference: engine document `_source` shape

use serde::{Deserialize, Serialize};

/// An encyclopedia article hit. Identity is implicit (no id field) and
/// uniqueness within a result set is not guaranteed. Immutable once returned
/// by the engine.
///
/// The index also stores a nested `keywords` array of `{ word }` objects per
/// article; those are queried (see the keyword clause in
/// [`crate::engine::query::build_query`]) but never materialized here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            url: url.into(),
        }
    }

    /// Truncated title for list display.
    pub fn display_title(&self, max_len: usize) -> String {
        if self.title.chars().count() > max_len {
            let truncated: String = self.title.chars().take(max_len).collect();
            format!("{}...", truncated)
        } else {
            self.title.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_deserializes_from_source() {
        let raw = r#"{"title":"Rust","text":"Rust is a language.","url":"https://en.wikipedia.org/wiki/Rust"}"#;
        let article: Article = serde_json::from_str(raw).unwrap();
        assert_eq!(article.title, "Rust");
        assert_eq!(article.url, "https://en.wikipedia.org/wiki/Rust");
    }

    #[test]
    fn test_display_title_truncation() {
        let article = Article::new("A very long encyclopedia article title", "", "");
        assert_eq!(article.display_title(10), "A very lon...");
        assert_eq!(article.display_title(100), article.title);
    }
}
