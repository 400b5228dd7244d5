// file: src/refine/segment.rs
// description: sentence segmentation and query-relevance filtering
// reference: naive delimiter split kept for output compatibility

/// Segments article body text into query-checkable units. The segmenter is a
/// seam: the delimiter splitter below reproduces the legacy output, and a
/// locale-aware sentence tokenizer can be swapped in without touching callers.
pub trait SentenceSegmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Splits on a single literal delimiter character. This is a naive sentence
/// boundary heuristic that mis-splits on abbreviations and decimals; that
/// exact behavior is required, so do not "fix" it here.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterSegmenter {
    delimiter: char,
}

impl DelimiterSegmenter {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for DelimiterSegmenter {
    fn default() -> Self {
        Self::new('.')
    }
}

impl SentenceSegmenter for DelimiterSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(self.delimiter).collect()
    }
}

/// Extract the segments of `text` that contain `query`, case-insensitively,
/// in original text order. Containment is whole-string substring matching,
/// not word-boundary matching, and duplicates are kept.
pub fn relevant_sentences(
    text: &str,
    query: &str,
    segmenter: &dyn SentenceSegmenter,
) -> Vec<String> {
    let needle = query.to_lowercase();

    segmenter
        .segment(text)
        .into_iter()
        .filter(|segment| segment.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}
