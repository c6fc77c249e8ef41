//! Search box and results panel for the landing page.
//!
//! Both components share one `RwSignal<SearchState>` owned by the page. The
//! box starts a search through [`SearchState::begin`], calls the service on a
//! local task and hands the outcome to [`SearchState::finish`].

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::concept_map::ConceptMap;
use crate::api::ApiClient;
use crate::search::{SearchResults, SearchState};

/// The service client provided by the app, or one built from the
/// compile-time configuration.
pub fn use_api_client() -> ApiClient {
	use_context::<ApiClient>().unwrap_or_default()
}

/// Query input with a submit button.
///
/// `input` is the text in the box; the page may write to it (for instance
/// when a hub on the backdrop is clicked).
#[component]
pub fn SearchBox(state: RwSignal<SearchState>, input: RwSignal<String>) -> impl IntoView {
	let client = use_api_client();
	let loading = Memo::new(move |_| state.with(|s| s.loading));

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let text = input.get_untracked();
		let Some(query) = state.try_update(|s| s.begin(&text)).flatten() else {
			return;
		};
		let client = client.clone();
		spawn_local(async move {
			let outcome = client.search(&query).await;
			state.try_update(|s| s.finish(outcome));
		});
	};

	view! {
		<form class="search-box" on:submit=on_submit>
			<input
				type="text"
				class="search-input"
				placeholder="Ask about startups, sectors, funding..."
				prop:value=move || input.get()
				on:input=move |ev| input.set(event_target_value(&ev))
				prop:disabled=move || loading.get()
			/>
			<button type="submit" class="search-button" disabled=move || loading.get()>
				{move || if loading.get() { "Analyzing..." } else { "Search" }}
			</button>
		</form>
	}
}

/// Summary, concepts, insights and concept map of the last search.
///
/// Hidden until a search succeeds. "Close" hides the panel and keeps the
/// results; "New search" clears everything including the input.
#[component]
pub fn ResultsPanel(state: RwSignal<SearchState>, input: RwSignal<String>) -> impl IntoView {
	let visible = Memo::new(move |_| state.with(|s| s.visible_results().cloned()));

	move || {
		visible.get().map(|results| {
			let map_results = results.clone();
			let SearchResults {
				query,
				summary,
				concepts,
				insights,
				..
			} = results;

			view! {
				<section class="results-panel">
					<header class="results-header">
						<h2>{query}</h2>
						<div class="results-actions">
							<button class="results-close" on:click=move |_| state.update(|s| s.hide_results())>
								"Close"
							</button>
							<button
								class="results-reset"
								on:click=move |_| {
									state.update(|s| s.reset());
									input.set(String::new());
								}
							>
								"New search"
							</button>
						</div>
					</header>

					<p class="results-summary">{summary}</p>

					{(!concepts.is_empty()).then(|| view! { <h3>"Key concepts"</h3> })}
					<ul class="concept-list">
						{concepts
							.into_iter()
							.map(|c| {
								let class = if c.is_main() { "concept main" } else { "concept" };
								view! {
									<li class=class title=c.description.unwrap_or_default()>
										{c.label}
									</li>
								}
							})
							.collect_view()}
					</ul>

					{(!insights.is_empty()).then(|| view! { <h3>"Insights"</h3> })}
					<ul class="insight-list">
						{insights
							.into_iter()
							.map(|insight| view! { <li>{insight}</li> })
							.collect_view()}
					</ul>

					<div class="concept-map">
						<ConceptMap results=map_results />
					</div>
				</section>
			}
		})
	}
}
