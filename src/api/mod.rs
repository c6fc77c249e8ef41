//! Client side of the analysis service.

mod client;
mod error;
mod types;

pub use client::{ApiClient, parse_search_response, parse_sector_response};
pub use error::{ApiError, ApiResult};
pub use types::{
	ConceptLink, ConceptNode, KnowledgeGraph, SearchRequest, SearchResponse, SectorResponse,
	Startup,
};
