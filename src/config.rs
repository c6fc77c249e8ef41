//! Build-time configuration.
//!
//! The browser has no process environment, so the service URL is captured
//! from `INTEL_API_URL` when the WASM bundle is compiled.

/// Service address used when `INTEL_API_URL` is unset or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

/// Where the analysis service lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	/// Base URL without a trailing slash.
	pub base_url: String,
}

impl ApiConfig {
	/// Read `INTEL_API_URL` as captured at compile time.
	pub fn from_env() -> Self {
		Self::from_value(option_env!("INTEL_API_URL"))
	}

	/// Build from an optional raw value, falling back to [`DEFAULT_API_URL`].
	pub fn from_value(value: Option<&str>) -> Self {
		let base = value
			.map(str::trim)
			.filter(|v| !v.is_empty())
			.unwrap_or(DEFAULT_API_URL);
		Self {
			base_url: base.trim_end_matches('/').to_string(),
		}
	}

	/// Absolute URL for a service path such as `/api/search`.
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self::from_value(None)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_or_blank_value_uses_default() {
		assert_eq!(ApiConfig::from_value(None).base_url, DEFAULT_API_URL);
		assert_eq!(ApiConfig::from_value(Some("   ")).base_url, DEFAULT_API_URL);
	}

	#[test]
	fn trailing_slashes_are_trimmed() {
		let config = ApiConfig::from_value(Some(" https://intel.example.com// "));
		assert_eq!(config.base_url, "https://intel.example.com");
	}

	#[test]
	fn endpoint_joins_with_single_slash() {
		let config = ApiConfig::from_value(Some("https://intel.example.com/"));
		assert_eq!(
			config.endpoint("/api/search"),
			"https://intel.example.com/api/search"
		);
		assert_eq!(
			config.endpoint("api/search"),
			"https://intel.example.com/api/search"
		);
	}
}
