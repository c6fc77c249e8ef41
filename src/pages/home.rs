use leptos::prelude::*;
use leptos_router::components::A;
use log::debug;

use crate::components::network::NetworkCanvas;
use crate::components::search::{ResultsPanel, SearchBox};
use crate::layout::Node;
use crate::search::SearchState;

/// Landing page: network backdrop, search box and results.
///
/// Clicking a labelled hub on the backdrop copies its label into the search
/// box.
#[component]
pub fn Home() -> impl IntoView {
	let state = RwSignal::new(SearchState::default());
	let input = RwSignal::new(String::new());

	let on_node_click = move |node: Node| {
		if let Some(label) = node.label {
			debug!("home: hub {} picked", label);
			input.set(label);
		}
	};

	view! {
		<div class="fullscreen-graph">
			<NetworkCanvas fullscreen=true on_node_click=on_node_click />
			<div class="graph-overlay">
				<h1>"Strategic Intelligence"</h1>
				<p class="subtitle">"Explore European startups, sectors and funding."</p>
				<SearchBox state=state input=input />
				<A href="/dashboard">"Startup dashboard"</A>
			</div>
			<ResultsPanel state=state input=input />
		</div>
	}
}
