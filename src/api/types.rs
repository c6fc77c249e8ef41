//! Wire types for the analysis service.
//!
//! Every field the UI does not strictly need is defaulted, so a response
//! missing pieces still deserializes and the view simply renders less.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/search`.
#[derive(Clone, Debug, Serialize)]
pub struct SearchRequest<'a> {
	pub query: &'a str,
}

/// Response of `POST /api/search`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResponse {
	#[serde(default)]
	pub status: Option<String>,
	#[serde(default)]
	pub query: Option<String>,
	#[serde(default)]
	pub knowledge_graph: Option<KnowledgeGraph>,
}

/// Analysis payload of a search.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct KnowledgeGraph {
	#[serde(default)]
	pub summary: Option<String>,
	#[serde(default)]
	pub nodes: Vec<ConceptNode>,
	#[serde(default)]
	pub insights: Vec<String>,
	/// Relations between concepts; older service builds omit them.
	#[serde(default)]
	pub connections: Vec<ConceptLink>,
}

/// A key concept extracted from the analysis.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConceptNode {
	pub id: String,
	pub label: String,
	/// `"main"` or `"secondary"` when present.
	#[serde(default, rename = "type")]
	pub kind: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
}

impl ConceptNode {
	/// Whether the service flagged this concept as a primary one.
	pub fn is_main(&self) -> bool {
		self.kind.as_deref() == Some("main")
	}
}

/// A relation between two concepts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConceptLink {
	pub source: String,
	pub target: String,
	#[serde(default = "default_link_strength")]
	pub strength: f64,
}

fn default_link_strength() -> f64 {
	0.7
}

/// Response of `GET /api/startups/sector/{sector}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SectorResponse {
	#[serde(default)]
	pub status: Option<String>,
	#[serde(default)]
	pub sector: Option<String>,
	#[serde(default)]
	pub startups: Vec<Startup>,
}

/// A startup record as the service formats it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Startup {
	pub id: String,
	pub name: String,
	pub sector: String,
	pub location: String,
	pub funding: f64,
	pub funding_formatted: String,
	pub description: String,
	pub description_short: String,
	pub year: u32,
	pub employees: u32,
	pub status: String,
}

impl Default for Startup {
	fn default() -> Self {
		Self {
			id: String::new(),
			name: "Unknown".into(),
			sector: "Technology".into(),
			location: "Europe".into(),
			funding: 0.0,
			funding_formatted: "€0".into(),
			description: String::new(),
			description_short: String::new(),
			year: 2023,
			employees: 10,
			status: "Active".into(),
		}
	}
}
