// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod refine;
pub mod server;
pub mod service;
pub mod utils;

pub use config::{Config, EngineConfig, SearchConfig, ServerConfig};
pub use engine::{HttpEngineClient, QueryBody, SearchEngine, StructuredQuery, build_query};
pub use error::{Result, SearchError};
pub use models::{Article, PageLabel, SearchResult};
pub use refine::{
    DelimiterSegmenter, Highlighter, SentenceSegmenter, page_labels, page_window,
    relevant_sentences, total_pages,
};
pub use service::{SearchRequest, SearchResponse, SearchService, SearchSession};
