// file: src/service.rs
// description: search orchestration: inbound contract, engine call, refinement
// reference: wires the query builder and result refiner around the engine client

use crate::config::SearchConfig;
use crate::engine::{SearchEngine, build_query};
use crate::error::{Result, SearchError};
use crate::models::{Article, PageLabel, SearchResult};
use crate::refine::{
    DelimiterSegmenter, Highlighter, SentenceSegmenter, page_labels, page_window, relevant_sentences,
    total_pages,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// Inbound search request. `limit` and `page` select the engine-side window:
/// the engine is asked to skip `(page - 1) * limit` hits.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default = "default_page")]
    pub page: u64,
}

const fn default_limit() -> u64 {
    10
}

const fn default_page() -> u64 {
    1
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: default_limit(),
            page: default_page(),
        }
    }

    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Response toward the UI layer. `total_results` is the count of hits in this
/// response only, not the engine's true total-match count; a page full of
/// hits says nothing about how many more the engine holds.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<Article>,
    pub total_results: usize,
}

/// One search interaction end to end: build the structured query, await the
/// engine's single response, refine hits into display-ready sentence sets.
///
/// Holds no mutable state: refinement is pure, and every call is an
/// independent request/response round trip, so one shared service instance
/// serves concurrent callers without coupling them. Display-state protection
/// against superseded searches lives in [`SearchSession`], scoped to a single
/// interactive session.
pub struct SearchService<E> {
    engine: E,
    collection: String,
    page_length: usize,
    fetch_limit: usize,
    segmenter: Box<dyn SentenceSegmenter>,
}

impl<E: SearchEngine> SearchService<E> {
    pub fn new(engine: E, collection: impl Into<String>, search: SearchConfig) -> Self {
        Self {
            engine,
            collection: collection.into(),
            page_length: search.page_length,
            fetch_limit: search.fetch_limit,
            segmenter: Box::new(DelimiterSegmenter::default()),
        }
    }

    /// Swap the sentence segmenter. The default delimiter splitter is the
    /// output-compatible choice; this seam exists so a smarter tokenizer can
    /// be plugged in without touching any caller.
    pub fn with_segmenter(mut self, segmenter: Box<dyn SentenceSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn page_length(&self) -> usize {
        self.page_length
    }

    /// Raw article search: the inbound `{query, limit, page}` contract.
    ///
    /// An empty or whitespace-only query is classified as match-nothing and
    /// returns an empty response without calling the engine. Any engine
    /// failure is returned as an error, never as zero results.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        if request.query.trim().is_empty() {
            debug!("Empty query classified as match-nothing, skipping engine call");
            return Ok(SearchResponse {
                results: vec![],
                total_results: 0,
            });
        }

        let articles = self
            .query_engine(&request.query, request.skip(), request.limit)
            .await?;

        let total_results = articles.len();
        Ok(SearchResponse {
            results: articles,
            total_results,
        })
    }

    /// Full pipeline for interactive display: fetch up to `fetch_limit` hits
    /// in one engine round trip, then derive per-article relevant sentences
    /// with query terms highlighted. Engine ranking order is preserved; the
    /// client never re-sorts.
    pub async fn search_refined(&self, query: &str) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            debug!("Empty query classified as match-nothing, skipping engine call");
            return Ok(vec![]);
        }

        let articles = self.query_engine(query, 0, self.fetch_limit as u64).await?;

        let highlighter = Highlighter::new(query);
        let results: Vec<SearchResult> = articles
            .into_iter()
            .map(|article| {
                let sentences: Vec<String> =
                    relevant_sentences(&article.text, query, self.segmenter.as_ref())
                        .iter()
                        .map(|sentence| highlighter.apply(sentence))
                        .collect();
                SearchResult::new(article, sentences)
            })
            .collect();

        debug!(
            "Refined {} hits, {} with relevant sentences",
            results.len(),
            results.iter().filter(|r| r.has_relevant_sentences()).count()
        );
        Ok(results)
    }

    /// Window refined results to one client-side page.
    pub fn page<'a>(&self, results: &'a [SearchResult], page_number: usize) -> &'a [SearchResult] {
        page_window(results, self.page_length, page_number)
    }

    /// Pager label row for the given result set and current page.
    pub fn pager(&self, result_count: usize, current_page: usize) -> Vec<PageLabel> {
        page_labels(current_page, total_pages(result_count, self.page_length))
    }

    /// Reachability check against the engine, for health reporting.
    pub async fn health(&self) -> Result<bool> {
        self.engine.ping().await
    }

    async fn query_engine(&self, query: &str, skip: u64, limit: u64) -> Result<Vec<Article>> {
        let structured = build_query(query, skip, limit, &self.collection);

        info!(
            "Query against '{}' (skip {}, limit {})",
            self.collection, skip, limit
        );

        self.engine.search(&structured).await
    }
}

/// Stale-response guard for one interactive session's display state.
///
/// A user typing successive searches can have responses arrive out of order;
/// without a guard a slow stale response would overwrite the results of a
/// newer search. Each refined search through a session takes a monotonically
/// increasing sequence number, and a response older than the last applied one
/// is discarded as [`SearchError::StaleResponse`].
///
/// The guard is per session on purpose: it orders one client's searches
/// against each other. Independent callers of the shared [`SearchService`]
/// have no display state in common and are never coupled.
pub struct SearchSession<E> {
    service: Arc<SearchService<E>>,
    next_seq: AtomicU64,
    last_applied: AtomicU64,
}

impl<E: SearchEngine> SearchSession<E> {
    pub fn new(service: Arc<SearchService<E>>) -> Self {
        Self {
            service,
            next_seq: AtomicU64::new(0),
            last_applied: AtomicU64::new(0),
        }
    }

    /// Refined search with superseded-response protection. The result is safe
    /// to apply to this session's display state: if a newer search already
    /// completed, the older response is discarded instead of returned.
    pub async fn search_refined(&self, query: &str) -> Result<Vec<SearchResult>> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let results = self.service.search_refined(query).await?;
        self.apply_response(seq)?;
        Ok(results)
    }

    pub fn service(&self) -> &SearchService<E> {
        &self.service
    }

    fn apply_response(&self, seq: u64) -> Result<()> {
        let previous = self.last_applied.fetch_max(seq, Ordering::SeqCst);
        if previous > seq {
            debug!("Discarding stale response {} (latest {})", seq, previous);
            return Err(SearchError::StaleResponse {
                request: seq,
                latest: previous,
            });
        }
        Ok(())
    }
}
