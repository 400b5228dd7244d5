// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod article;
pub mod page;
pub mod search_result;

pub use article::Article;
pub use page::PageLabel;
pub use search_result::SearchResult;
