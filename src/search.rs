//! Search flow state.
//!
//! The view owns one [`SearchState`] and drives it through [`SearchState::begin`]
//! and [`SearchState::finish`] around an asynchronous [`SearchBackend`] call.
//! Failures never surface to the user: they are logged and whatever was on
//! screen stays there.

use async_trait::async_trait;
use log::{error, info};

use crate::api::{ApiResult, ConceptLink, ConceptNode, KnowledgeGraph, SearchResponse};

/// Summary shown when the service returns none.
pub const DEFAULT_SUMMARY: &str = "No summary available.";

/// Anything that can answer a search query.
#[async_trait(?Send)]
pub trait SearchBackend {
	async fn search(&self, query: &str) -> ApiResult<SearchResponse>;
}

/// What the results panel renders.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResults {
	pub query: String,
	pub summary: String,
	pub concepts: Vec<ConceptNode>,
	pub links: Vec<ConceptLink>,
	pub insights: Vec<String>,
}

impl SearchResults {
	fn from_response(query: &str, response: SearchResponse) -> Self {
		let KnowledgeGraph {
			summary,
			nodes,
			insights,
			connections,
		} = response.knowledge_graph.unwrap_or_default();

		Self {
			query: response.query.unwrap_or_else(|| query.to_string()),
			summary: summary
				.filter(|s| !s.trim().is_empty())
				.unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
			concepts: nodes,
			links: connections,
			insights,
		}
	}
}

/// UI state of the landing page search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
	/// Last submitted query.
	pub query: String,
	pub loading: bool,
	/// Most recent successful results, kept even while hidden.
	pub results: Option<SearchResults>,
	pub show_results: bool,
}

impl SearchState {
	/// Start a search. Returns the trimmed query to send, or `None` when the
	/// query is blank or a search is already in flight.
	pub fn begin(&mut self, query: &str) -> Option<String> {
		let query = query.trim();
		if query.is_empty() || self.loading {
			return None;
		}
		self.query = query.to_string();
		self.loading = true;
		Some(self.query.clone())
	}

	/// Apply the outcome of the call started by [`begin`](Self::begin).
	pub fn finish(&mut self, outcome: ApiResult<SearchResponse>) {
		self.loading = false;
		match outcome {
			Ok(response) => {
				let results = SearchResults::from_response(&self.query, response);
				info!(
					"search: {} concepts, {} insights for {:?}",
					results.concepts.len(),
					results.insights.len(),
					results.query
				);
				self.results = Some(results);
				self.show_results = true;
			}
			Err(e) => error!("search failed for {:?}: {}", self.query, e),
		}
	}

	/// Close the panel, keeping the last results.
	pub fn hide_results(&mut self) {
		self.show_results = false;
	}

	/// Back to a blank search.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Results to render, if the panel is open.
	pub fn visible_results(&self) -> Option<&SearchResults> {
		self.results.as_ref().filter(|_| self.show_results)
	}
}

/// Run one full search against `backend`, returning the updated state.
pub async fn run<B: SearchBackend + ?Sized>(
	mut state: SearchState,
	query: &str,
	backend: &B,
) -> SearchState {
	if let Some(query) = state.begin(query) {
		let outcome = backend.search(&query).await;
		state.finish(outcome);
	}
	state
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use futures::executor::block_on;

	use super::*;
	use crate::api::{ApiError, parse_search_response};

	struct Canned {
		body: Result<&'static str, u16>,
		seen: RefCell<Vec<String>>,
	}

	impl Canned {
		fn ok(body: &'static str) -> Self {
			Self {
				body: Ok(body),
				seen: RefCell::new(Vec::new()),
			}
		}

		fn status(code: u16) -> Self {
			Self {
				body: Err(code),
				seen: RefCell::new(Vec::new()),
			}
		}
	}

	#[async_trait(?Send)]
	impl SearchBackend for Canned {
		async fn search(&self, query: &str) -> ApiResult<SearchResponse> {
			self.seen.borrow_mut().push(query.to_string());
			match self.body {
				Ok(body) => parse_search_response(body),
				Err(code) => Err(ApiError::Status(code)),
			}
		}
	}

	#[test]
	fn blank_query_is_ignored() {
		let mut state = SearchState::default();
		assert_eq!(state.begin("   "), None);
		assert!(!state.loading);
	}

	#[test]
	fn second_begin_while_loading_is_ignored() {
		let mut state = SearchState::default();
		assert_eq!(state.begin(" fintech "), Some("fintech".to_string()));
		assert!(state.loading);
		assert_eq!(state.begin("healthtech"), None);
		assert_eq!(state.query, "fintech");
	}

	#[test]
	fn success_shows_results() {
		let backend = Canned::ok(
			r#"{"knowledge_graph":{"summary":"x","nodes":[{"id":"1","label":"a"}],"insights":["b"]}}"#,
		);
		let state = block_on(run(SearchState::default(), "mobility", &backend));

		assert!(!state.loading);
		let results = state.visible_results().expect("results shown");
		assert_eq!(results.summary, "x");
		assert_eq!(results.concepts.len(), 1);
		assert_eq!(results.concepts[0].label, "a");
		assert_eq!(results.insights, vec!["b".to_string()]);
		assert_eq!(*backend.seen.borrow(), vec!["mobility".to_string()]);
	}

	#[test]
	fn missing_summary_falls_back_to_default() {
		let backend = Canned::ok(r#"{"status":"success"}"#);
		let state = block_on(run(SearchState::default(), "q", &backend));
		let results = state.visible_results().unwrap();
		assert_eq!(results.summary, DEFAULT_SUMMARY);
		assert!(results.concepts.is_empty());
		assert!(results.insights.is_empty());
		assert_eq!(results.query, "q");
	}

	#[test]
	fn failure_keeps_previous_view() {
		let first = Canned::ok(r#"{"knowledge_graph":{"summary":"first"}}"#);
		let state = block_on(run(SearchState::default(), "one", &first));

		let state = block_on(run(state, "two", &Canned::status(500)));
		assert!(!state.loading);
		assert!(state.show_results);
		assert_eq!(state.visible_results().unwrap().summary, "first");
	}

	#[test]
	fn failure_from_blank_state_keeps_panel_hidden() {
		let state = block_on(run(SearchState::default(), "q", &Canned::status(503)));
		assert!(!state.loading);
		assert!(!state.show_results);
		assert!(state.results.is_none());
	}

	#[test]
	fn malformed_body_is_treated_as_failure() {
		let state = block_on(run(SearchState::default(), "q", &Canned::ok("not json")));
		assert!(!state.loading);
		assert!(state.visible_results().is_none());
	}

	#[test]
	fn hide_then_reset() {
		let backend = Canned::ok(r#"{"knowledge_graph":{"summary":"s"}}"#);
		let mut state = block_on(run(SearchState::default(), "q", &backend));

		state.hide_results();
		assert!(state.visible_results().is_none());
		assert!(state.results.is_some());

		state.reset();
		assert_eq!(state, SearchState::default());
	}
}
