//! intel-graph: search front-end for a strategic intelligence service.
//!
//! The landing page draws a procedurally generated, brain-shaped network
//! behind a search box; queries go to the analysis service and the answer
//! is shown as a summary, insights and a concept map. A dashboard page shows
//! a mock startup profile with sector peers fetched from the service.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

pub mod api;
pub mod components;
pub mod config;
pub mod dashboard;
pub mod layout;
mod pages;
pub mod search;

use crate::pages::dashboard::Dashboard;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

pub use api::{ApiClient, ApiError, ApiResult};
pub use components::network::NetworkCanvas;
pub use config::ApiConfig;
pub use layout::{Edge, Layout, Node, NodeCategory};
pub use search::{SearchBackend, SearchResults, SearchState};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("intel-graph: logging initialized");
}

/// Main application component: routes plus the shared service client.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let client = ApiClient::default();
	info!("intel-graph: service at {}", client.config().base_url);
	provide_context(client);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Strategic Intelligence" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/dashboard") view=Dashboard />
			</Routes>
		</Router>
	}
}
