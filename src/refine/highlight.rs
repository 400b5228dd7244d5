// file: src/refine/highlight.rs
// description: query term highlighting as an ordered pipeline of replacement passes
// reference: https://docs.rs/regex

use regex::Regex;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// One replacement pass: wraps every case-insensitive occurrence of a single
/// query word in highlight markers. Substring semantics, not word-boundary: a
/// short word matches inside longer unrelated words, which is accepted
/// behavior.
#[derive(Debug, Clone)]
struct HighlightPass {
    pattern: Regex,
}

impl HighlightPass {
    fn new(word: &str) -> Self {
        // regex::escape guarantees the pattern is valid for any word
        let pattern = Regex::new(&format!("(?i){}", regex::escape(word)))
            .expect("escaped highlight word is a valid pattern");
        Self { pattern }
    }

    fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, format!("{}$0{}", MARK_OPEN, MARK_CLOSE))
            .into_owned()
    }
}

/// Ordered list of per-word passes built once per query. Passes run left to
/// right in query-word order, each over the previous pass's output, so query
/// words sharing substrings can produce nested or overlapping markers; that
/// is faithful to the required output, not incidental.
#[derive(Debug, Clone)]
pub struct Highlighter {
    passes: Vec<HighlightPass>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let passes = query.split_whitespace().map(HighlightPass::new).collect();
        Self { passes }
    }

    pub fn apply(&self, sentence: &str) -> String {
        self.passes
            .iter()
            .fold(sentence.to_string(), |text, pass| pass.apply(&text))
    }
}
