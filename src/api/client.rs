//! HTTP client for the analysis service.

use async_trait::async_trait;
use log::{debug, info};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, Response};

use super::error::{ApiError, ApiResult};
use super::types::{SearchRequest, SearchResponse, SectorResponse, Startup};
use crate::config::ApiConfig;
use crate::search::SearchBackend;

/// Talks to the analysis service over HTTP.
///
/// No timeout or retry is configured: a failed call surfaces once as an
/// [`ApiError`] and the caller decides what to show.
#[derive(Clone, Debug)]
pub struct ApiClient {
	config: ApiConfig,
	http: Client,
}

impl ApiClient {
	pub fn new(config: ApiConfig) -> Self {
		Self {
			config,
			http: Client::new(),
		}
	}

	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	/// URL of the sector lookup; the sector becomes one encoded path segment.
	pub fn sector_url(&self, sector: &str) -> String {
		let segment = utf8_percent_encode(sector, NON_ALPHANUMERIC);
		self.config
			.endpoint(&format!("/api/startups/sector/{segment}"))
	}

	/// `POST /api/search`.
	pub async fn search(&self, query: &str) -> ApiResult<SearchResponse> {
		let url = self.config.endpoint("/api/search");
		info!("search: {query:?}");
		let response = self
			.http
			.post(&url)
			.json(&SearchRequest { query })
			.send()
			.await?;
		let body = success_body(response).await?;
		parse_search_response(&body)
	}

	/// `GET /api/startups/sector/{sector}`.
	pub async fn startups_by_sector(&self, sector: &str) -> ApiResult<Vec<Startup>> {
		let url = self.sector_url(sector);
		debug!("sector lookup: {url}");
		let response = self.http.get(&url).send().await?;
		let body = success_body(response).await?;
		Ok(parse_sector_response(&body)?.startups)
	}
}

impl Default for ApiClient {
	fn default() -> Self {
		Self::new(ApiConfig::from_env())
	}
}

#[async_trait(?Send)]
impl SearchBackend for ApiClient {
	async fn search(&self, query: &str) -> ApiResult<SearchResponse> {
		ApiClient::search(self, query).await
	}
}

async fn success_body(response: Response) -> ApiResult<String> {
	let status = response.status();
	if !status.is_success() {
		return Err(ApiError::Status(status.as_u16()));
	}
	Ok(response.text().await?)
}

pub fn parse_search_response(body: &str) -> ApiResult<SearchResponse> {
	Ok(serde_json::from_str(body)?)
}

pub fn parse_sector_response(body: &str) -> ApiResult<SectorResponse> {
	Ok(serde_json::from_str(body)?)
}
