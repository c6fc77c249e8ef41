use async_trait::async_trait;
use futures::executor::block_on;
use intel_graph::api::{SearchResponse, parse_search_response};
use intel_graph::search::{self, SearchBackend, SearchState};
use intel_graph::{ApiError, ApiResult};

/// Answers every query with the same outcome.
enum Mock {
	Body(&'static str),
	HttpError(u16),
}

#[async_trait(?Send)]
impl SearchBackend for Mock {
	async fn search(&self, _query: &str) -> ApiResult<SearchResponse> {
		match self {
			Mock::Body(body) => parse_search_response(body),
			Mock::HttpError(code) => Err(ApiError::Status(*code)),
		}
	}
}

#[test]
fn successful_search_shows_results() {
	let backend = Mock::Body(
		r#"{"knowledge_graph":{"summary":"x","nodes":[{"id":"1","label":"a"}],"insights":["b"]}}"#,
	);
	let state = block_on(search::run(SearchState::default(), "e-mobility", &backend));

	assert!(!state.loading);
	assert!(state.show_results);
	let results = state.visible_results().expect("panel open");
	assert_eq!(results.summary, "x");
	let labels: Vec<&str> = results.concepts.iter().map(|c| c.label.as_str()).collect();
	assert_eq!(labels, ["a"]);
	assert_eq!(results.insights, ["b"]);
}

#[test]
fn http_error_leaves_panel_hidden() {
	let state = block_on(search::run(SearchState::default(), "e-mobility", &Mock::HttpError(500)));

	assert!(!state.loading);
	assert!(!state.show_results);
	assert!(state.visible_results().is_none());
}

#[test]
fn blank_query_never_reaches_the_backend() {
	let state = block_on(search::run(SearchState::default(), "  ", &Mock::HttpError(500)));
	assert_eq!(state, SearchState::default());
}

#[test]
fn connections_become_concept_links() {
	let backend = Mock::Body(
		r#"{"query":"fintech","knowledge_graph":{
			"nodes":[{"id":"1","label":"Payments","type":"main"},{"id":"2","label":"Lending"}],
			"connections":[{"source":"1","target":"2","strength":0.4}]
		}}"#,
	);
	let state = block_on(search::run(SearchState::default(), "fintech", &backend));
	let results = state.visible_results().expect("panel open");

	assert_eq!(results.query, "fintech");
	assert!(results.concepts[0].is_main());
	assert_eq!(results.links.len(), 1);
	assert!((results.links[0].strength - 0.4).abs() < 1e-9);
}
