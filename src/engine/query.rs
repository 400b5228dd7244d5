// file: src/engine/query.rs
// description: structured boolean query construction for the search engine
// reference: engine query DSL (bool/should/match/nested clauses)

use serde::Serialize;
use std::collections::BTreeMap;

/// Boost applied to exact title matches, the strongest relevance signal.
const TITLE_BOOST: f32 = 3.0;

/// Boost applied to fuzzy body-text matches.
const TEXT_BOOST: f32 = 2.0;

/// Boost applied to fuzzy matches against the nested keyword array.
const KEYWORD_BOOST: f32 = 1.5;

/// A fully built request against one collection: the body serializes to the
/// engine's JSON query DSL, the collection names the index to run it against.
#[derive(Debug, Clone, Serialize)]
pub struct StructuredQuery {
    #[serde(skip)]
    pub collection: String,
    #[serde(flatten)]
    pub body: QueryBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryBody {
    pub from: u64,
    pub size: u64,
    pub query: QueryNode,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryNode {
    #[serde(rename = "bool")]
    pub boolean: BoolQuery,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoolQuery {
    pub should: Vec<ShouldClause>,
    // Only the outer bool carries this; the nested keyword bool omits it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_should_match: Option<u32>,
}

/// One optional clause of the boolean query. Externally tagged serialization
/// yields the engine's `{"match": {...}}` / `{"nested": {...}}` shapes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShouldClause {
    Match(BTreeMap<String, MatchSpec>),
    Nested(NestedQuery),
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchSpec {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzziness: Option<String>,
    pub boost: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NestedQuery {
    pub path: String,
    pub query: QueryNode,
}

fn match_clause(field: &str, query: &str, fuzziness: Option<&str>, boost: f32) -> ShouldClause {
    let spec = MatchSpec {
        query: query.to_string(),
        fuzziness: fuzziness.map(str::to_string),
        boost,
    };
    ShouldClause::Match(BTreeMap::from([(field.to_string(), spec)]))
}

/// Build the relevance query for one search interaction.
///
/// Three weighted optional clauses, score-combined by the engine, with
/// `minimum_should_match: 1` guaranteeing at least one must match for a
/// document to be returned:
/// 1. exact title match, boost 3.0
/// 2. fuzzy body-text match (`fuzziness: AUTO`), boost 2.0
/// 3. nested keyword-array fuzzy match, boost 1.5
///
/// The query text is passed through verbatim; `skip`/`limit` map to the
/// engine-side result offset and size. Tie-break order among equally scored
/// documents is left to the engine.
pub fn build_query(query: &str, skip: u64, limit: u64, collection: &str) -> StructuredQuery {
    let keyword_match = match_clause("keywords.word", query, Some("AUTO"), KEYWORD_BOOST);

    StructuredQuery {
        collection: collection.to_string(),
        body: QueryBody {
            from: skip,
            size: limit,
            query: QueryNode {
                boolean: BoolQuery {
                    should: vec![
                        match_clause("title", query, None, TITLE_BOOST),
                        match_clause("text", query, Some("AUTO"), TEXT_BOOST),
                        ShouldClause::Nested(NestedQuery {
                            path: "keywords".to_string(),
                            query: QueryNode {
                                boolean: BoolQuery {
                                    should: vec![keyword_match],
                                    minimum_should_match: None,
                                },
                            },
                        }),
                    ],
                    minimum_should_match: Some(1),
                },
            },
        },
    }
}
