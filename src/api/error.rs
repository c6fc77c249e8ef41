//! Error types for calls to the analysis service.

use thiserror::Error;

/// Errors that can occur when talking to the analysis service.
#[derive(Error, Debug)]
pub enum ApiError {
	/// Transport failure (connection refused, CORS, aborted fetch...).
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),

	/// The service answered with a non-success status code.
	#[error("service returned status {0}")]
	Status(u16),

	/// The response body was not the JSON we expected.
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;
