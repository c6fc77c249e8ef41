use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use log::{info, warn};

use crate::api::Startup;
use crate::components::search::use_api_client;
use crate::dashboard::{DashboardData, format_funding, mock_dashboard};

/// Maximum number of sector peers listed.
const PEER_LIMIT: usize = 5;

/// Profile page for the hard-coded startup, with peers from the same sector
/// fetched from the service.
#[component]
pub fn Dashboard() -> impl IntoView {
	let DashboardData {
		startup,
		founders,
		metrics,
		rounds,
		tags,
	} = mock_dashboard();
	let peers = RwSignal::new(Vec::<Startup>::new());

	let client = use_api_client();
	let (sector, own_name) = (startup.sector.clone(), startup.name.clone());
	spawn_local(async move {
		match client.startups_by_sector(&sector).await {
			Ok(startups) => {
				let found: Vec<Startup> = startups
					.into_iter()
					.filter(|s| s.name != own_name)
					.take(PEER_LIMIT)
					.collect();
				info!("dashboard: {} peers in {}", found.len(), sector);
				let _ = peers.try_set(found);
			}
			Err(e) => warn!("dashboard: sector lookup for {} failed: {}", sector, e),
		}
	});

	view! {
		<div class="dashboard">
			<A href="/">"Back to search"</A>

			<section class="profile">
				<h1>{startup.name.clone()}</h1>
				<p class="profile-meta">
					{format!(
						"{} · {} · founded {} · {} employees · {}",
						startup.sector,
						startup.location,
						startup.year,
						startup.employees,
						startup.status,
					)}
				</p>
				<p class="profile-description">{startup.description.clone()}</p>
				<p class="profile-funding">"Total raised: " {startup.funding_formatted.clone()}</p>
				<p class="profile-founders">"Founders: " {founders.join(", ")}</p>
				<ul class="tags">
					{tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
				</ul>
			</section>

			<section class="metrics">
				{metrics
					.into_iter()
					.map(|m| {
						let class = if m.trend >= 0.0 { "trend up" } else { "trend down" };
						view! {
							<div class="metric">
								<span class="metric-label">{m.label}</span>
								<span class="metric-value">{m.value.clone()}</span>
								<span class=class>{m.trend_label()}</span>
							</div>
						}
					})
					.collect_view()}
			</section>

			<section class="rounds">
				<h2>"Funding rounds"</h2>
				<table>
					<tbody>
						{rounds
							.into_iter()
							.map(|r| {
								view! {
									<tr>
										<td>{r.stage}</td>
										<td>{r.year}</td>
										<td>{format_funding(r.amount)}</td>
										<td>{r.lead_investor}</td>
									</tr>
								}
							})
							.collect_view()}
					</tbody>
				</table>
			</section>

			<Show when=move || peers.with(|p| !p.is_empty())>
				<section class="peers">
					<h2>"Sector peers"</h2>
					<ul>
						{move || {
							peers
								.get()
								.into_iter()
								.map(|s| {
									view! {
										<li>
											<strong>{s.name}</strong>
											{format!(" · {} · {}", s.location, s.funding_formatted)}
											<p>{s.description_short}</p>
										</li>
									}
								})
								.collect_view()
						}}
					</ul>
				</section>
			</Show>
		</div>
	}
}
