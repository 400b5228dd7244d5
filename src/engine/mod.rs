// file: src/engine/mod.rs
// description: search engine query construction and client exports
// reference: internal module structure

pub mod client;
pub mod query;

pub use client::{HttpEngineClient, SearchEngine};
pub use query::{QueryBody, StructuredQuery, build_query};
