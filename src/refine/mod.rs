// file: src/refine/mod.rs
// description: client-side result refinement exports
// reference: internal module structure

pub mod highlight;
pub mod paginate;
pub mod segment;

pub use highlight::{Highlighter, MARK_CLOSE, MARK_OPEN};
pub use paginate::{page_labels, page_window, total_pages};
pub use segment::{DelimiterSegmenter, SentenceSegmenter, relevant_sentences};
