// file: tests/search_pipeline.rs
// description: end-to-end pipeline tests over a fake search engine

use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use wiki_search::{
    Article, Config, Result, SearchEngine, SearchError, SearchRequest, SearchService,
    StructuredQuery,
};

type SeenQueries = Arc<Mutex<Vec<serde_json::Value>>>;

/// Stand-in for the engine: captures every query body and replays a canned
/// hit list in a fixed order.
struct CannedEngine {
    hits: Vec<Article>,
    queries: SeenQueries,
}

impl SearchEngine for CannedEngine {
    async fn search(&self, query: &StructuredQuery) -> Result<Vec<Article>> {
        self.queries
            .lock()
            .unwrap()
            .push(serde_json::to_value(&query.body).unwrap());
        Ok(self.hits.clone())
    }

    async fn ping(&self) -> Result<bool> {
        Ok(true)
    }
}

struct DownEngine;

impl SearchEngine for DownEngine {
    async fn search(&self, _query: &StructuredQuery) -> Result<Vec<Article>> {
        Err(SearchError::EngineUnavailable("tcp connect error".into()))
    }

    async fn ping(&self) -> Result<bool> {
        Err(SearchError::EngineUnavailable("tcp connect error".into()))
    }
}

fn fixture_articles() -> Vec<Article> {
    vec![
        Article::new(
            "Cat",
            "The cat is a domestic species. Cats hunt at night. No other mention here.",
            "https://en.wikipedia.org/wiki/Cat",
        ),
        Article::new(
            "Catalog",
            "A catalog lists items. Unrelated sentence.",
            "https://en.wikipedia.org/wiki/Catalog",
        ),
        Article::new(
            "Dog",
            "Dogs are loyal. They bark.",
            "https://en.wikipedia.org/wiki/Dog",
        ),
    ]
}

fn service(hits: Vec<Article>) -> (SearchService<CannedEngine>, SeenQueries) {
    let queries: SeenQueries = Arc::new(Mutex::new(vec![]));
    let engine = CannedEngine {
        hits,
        queries: Arc::clone(&queries),
    };
    let service = SearchService::new(engine, "wikipedia", Config::default_config().search);
    (service, queries)
}

#[tokio::test]
async fn refined_search_extracts_and_highlights_per_hit() {
    let (service, _) = service(fixture_articles());
    let results = service.search_refined("cat").await.unwrap();

    // Engine order preserved, no re-sort.
    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Cat", "Catalog", "Dog"]);

    assert_eq!(
        results[0].sentences,
        vec![
            "The <mark>cat</mark> is a domestic species".to_string(),
            " <mark>Cat</mark>s hunt at night".to_string(),
        ]
    );

    // Substring semantics: "cat" matches inside "catalog".
    assert_eq!(
        results[1].sentences,
        vec!["A <mark>cat</mark>alog lists items".to_string()]
    );

    // No relevant sentence: deterministic empty list, not a failure.
    assert!(results[2].sentences.is_empty());
}

#[tokio::test]
async fn inbound_contract_shapes_the_engine_query() {
    let (service, queries) = service(fixture_articles());
    let request = SearchRequest {
        query: "domestic cat".into(),
        limit: 20,
        page: 2,
    };

    let response = service.search(&request).await.unwrap();
    assert_eq!(response.total_results, 3);

    let queries = queries.lock().unwrap();
    let body = &queries[0];

    assert_eq!(body["from"], serde_json::json!(20));
    assert_eq!(body["size"], serde_json::json!(20));
    assert_eq!(body["query"]["bool"]["minimum_should_match"], serde_json::json!(1));
    assert_eq!(body["query"]["bool"]["should"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["query"]["bool"]["should"][0]["match"]["title"]["query"],
        serde_json::json!("domestic cat")
    );
}

#[tokio::test]
async fn response_serializes_with_camel_case_total() {
    let (service, _) = service(fixture_articles());
    let response = service.search(&SearchRequest::new("cat")).await.unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["totalResults"], serde_json::json!(3));
    assert_eq!(value["results"].as_array().unwrap().len(), 3);
    assert_eq!(value["results"][0]["title"], serde_json::json!("Cat"));
}

#[tokio::test]
async fn engine_failure_is_terminal_for_the_attempt() {
    let service = SearchService::new(DownEngine, "wikipedia", Config::default_config().search);

    let err = service.search(&SearchRequest::new("cat")).await.unwrap_err();
    assert!(err.is_engine_failure());

    let err = service.search_refined("cat").await.unwrap_err();
    assert!(err.is_engine_failure());
}

#[tokio::test]
async fn multi_word_query_filters_on_whole_phrase() {
    let (service, _) = service(fixture_articles());
    let results = service.search_refined("domestic species").await.unwrap();

    // Sentence filtering is whole-string containment of the query, while
    // highlighting is per word.
    assert_eq!(
        results[0].sentences,
        vec!["The cat is a <mark>domestic</mark> <mark>species</mark>".to_string()]
    );
    assert!(results[1].sentences.is_empty());
}

#[tokio::test]
async fn windowing_over_refined_results() {
    let many: Vec<Article> = (0..25)
        .map(|i| {
            Article::new(
                format!("Cat {}", i),
                "A cat appears here.",
                "https://example.org",
            )
        })
        .collect();
    let (service, _) = service(many);

    let results = service.search_refined("cat").await.unwrap();
    assert_eq!(results.len(), 25);
    assert_eq!(service.page(&results, 1).len(), 10);
    assert_eq!(service.page(&results, 3).len(), 5);
    assert!(service.page(&results, 4).is_empty());
}
