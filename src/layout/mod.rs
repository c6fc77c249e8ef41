//! Procedural node/edge layout for the decorative network backdrop.
//!
//! [`generate`] scatters a fixed set of labelled hub nodes and a crowd of
//! unlabelled nodes across a brain-like silhouette, then wires nearby nodes
//! together with randomly accepted edges. Every call draws a fresh layout from
//! the supplied random source; pass a seeded RNG to reproduce one.
//!
//! The neighbour search compares every node against every other node, so
//! generation is O(n²). With at most [`MAX_NODES`] nodes that is a few tens of
//! thousands of distance checks per call, which is the intended ceiling.

pub mod regions;

use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use regions::{Ellipse, Region};

/// Lower bound on the node count.
pub const MIN_NODES: usize = 120;
/// Upper bound on the node count.
pub const MAX_NODES: usize = 180;
/// Canvas area (px²) allotted to each node before clamping.
const AREA_PER_NODE: f64 = 4000.0;

/// Number of labelled hub nodes in every layout.
pub const HUB_COUNT: usize = 5;

/// Hub labels used when extended labels are off.
pub const HUB_LABELS: [&str; HUB_COUNT] =
	["Mobility", "Funding", "Startups", "Technology", "Europe"];

/// Hub labels used when extended labels are on.
pub const EXTENDED_HUB_LABELS: [&str; HUB_COUNT] = [
	"Smart Mobility",
	"Venture Funding",
	"Startup Ecosystem",
	"Deep Technology",
	"European Markets",
];

const REGION_PLACEMENT_P: f64 = 0.7;
const MINOR_HUB_P: f64 = 0.15;
/// Hubs sit within this fraction of their region's radii.
const HUB_SPREAD: f64 = 0.5;
/// Noise applied to bridge nodes, as a fraction of the shorter canvas side.
const BRIDGE_NOISE: f64 = 0.04;
const MIN_STRENGTH: f64 = 0.2;

/// Visual role of a node. Governs styling and connection density.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeCategory {
	Hub,
	MinorHub,
	Leaf,
}

impl NodeCategory {
	/// Stable lowercase name.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeCategory::Hub => "hub",
			NodeCategory::MinorHub => "minor-hub",
			NodeCategory::Leaf => "leaf",
		}
	}

	fn connection_target(self) -> RangeInclusive<usize> {
		match self {
			NodeCategory::Hub => 6..=14,
			NodeCategory::MinorHub | NodeCategory::Leaf => 3..=8,
		}
	}

	/// Longest accepted edge, as a fraction of the shorter canvas side.
	fn ceiling_fraction(self) -> f64 {
		match self {
			NodeCategory::Hub => 0.30,
			NodeCategory::MinorHub => 0.20,
			NodeCategory::Leaf => 0.15,
		}
	}

	fn acceptance_baseline(self) -> f64 {
		match self {
			NodeCategory::Hub => 0.45,
			NodeCategory::MinorHub => 0.30,
			NodeCategory::Leaf => 0.20,
		}
	}
}

/// A positioned node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Unique within one layout.
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	/// Present only on hubs.
	pub label: Option<String>,
	pub category: NodeCategory,
	/// Ids of nodes sharing an edge with this one, in either direction.
	pub neighbors: Vec<String>,
}

impl Node {
	/// Whether this is one of the labelled hubs.
	pub fn is_hub(&self) -> bool {
		self.category == NodeCategory::Hub
	}

	fn distance_to(&self, other: &Node) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// A directed edge recorded from `source`'s neighbour scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub source: String,
	pub target: String,
	/// In `(0, 1]`; used for opacity only.
	pub strength: f64,
}

/// One generated node/edge set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
	pub width: f64,
	pub height: f64,
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
}

impl Layout {
	/// The boundary all node positions were clamped into.
	pub fn silhouette(&self) -> Ellipse {
		regions::silhouette(self.width, self.height)
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.nodes.iter().position(|n| n.id == id)
	}

	pub fn hubs(&self) -> impl Iterator<Item = &Node> {
		self.nodes.iter().filter(|n| n.is_hub())
	}
}

/// Node count for a canvas: one node per [`AREA_PER_NODE`], clamped to
/// `[MIN_NODES, MAX_NODES]`.
pub fn target_node_count(width: f64, height: f64) -> usize {
	((width * height / AREA_PER_NODE).floor() as usize).clamp(MIN_NODES, MAX_NODES)
}

/// Generate a fresh layout for a `width` × `height` canvas.
///
/// `extended_labels` picks between [`HUB_LABELS`] and [`EXTENDED_HUB_LABELS`].
/// Dimensions must be positive; the result for anything else is unspecified.
pub fn generate<R: Rng + ?Sized>(
	width: f64,
	height: f64,
	extended_labels: bool,
	rng: &mut R,
) -> Layout {
	let count = target_node_count(width, height);
	let zones = regions::regions(width, height);
	let bounds = regions::silhouette(width, height);
	let min_side = width.min(height);
	let labels = if extended_labels {
		&EXTENDED_HUB_LABELS
	} else {
		&HUB_LABELS
	};

	let mut nodes = Vec::with_capacity(count);

	for (i, label) in labels.iter().enumerate() {
		let zone = &zones[i % zones.len()];
		let (x, y) = zone.ellipse.sample(rng, HUB_SPREAD);
		let (x, y) = bounds.reflect_inside(x, y);
		nodes.push(Node {
			id: node_id(i),
			x,
			y,
			radius: 8.0 + rng.gen_range(0.0..1.5),
			label: Some((*label).to_string()),
			category: NodeCategory::Hub,
			neighbors: Vec::new(),
		});
	}

	for i in HUB_COUNT..count {
		let (x, y) = if rng.gen_bool(REGION_PLACEMENT_P) {
			let zone = &zones[rng.gen_range(0..zones.len())];
			zone.ellipse.sample(rng, 1.0)
		} else {
			bridge_point(&zones, min_side * BRIDGE_NOISE, rng)
		};
		let (x, y) = bounds.reflect_inside(x, y);

		let (category, radius) = if rng.gen_bool(MINOR_HUB_P) {
			(NodeCategory::MinorHub, rng.gen_range(3.5..5.0))
		} else {
			(NodeCategory::Leaf, rng.gen_range(1.2..2.8))
		};

		nodes.push(Node {
			id: node_id(i),
			x,
			y,
			radius,
			label: None,
			category,
			neighbors: Vec::new(),
		});
	}

	let edges = connect(&mut nodes, min_side, rng);
	debug!(
		"layout: {} nodes, {} edges for {}x{}",
		nodes.len(),
		edges.len(),
		width,
		height
	);

	Layout {
		width,
		height,
		nodes,
		edges,
	}
}

fn node_id(index: usize) -> String {
	format!("n{index}")
}

/// A point on the segment between two random region centres, jittered so the
/// bridges read as connective tissue rather than straight lines.
fn bridge_point<R: Rng + ?Sized>(zones: &[Region], noise: f64, rng: &mut R) -> (f64, f64) {
	let a = &zones[rng.gen_range(0..zones.len())].ellipse;
	let b = &zones[rng.gen_range(0..zones.len())].ellipse;
	let t = rng.r#gen::<f64>();
	(
		a.cx + (b.cx - a.cx) * t + rng.gen_range(-1.0..=1.0) * noise,
		a.cy + (b.cy - a.cy) * t + rng.gen_range(-1.0..=1.0) * noise,
	)
}

fn connect<R: Rng + ?Sized>(nodes: &mut [Node], min_side: f64, rng: &mut R) -> Vec<Edge> {
	let mut edges = Vec::new();

	for i in 0..nodes.len() {
		let category = nodes[i].category;
		let target = rng.gen_range(category.connection_target());
		let ceiling = category.ceiling_fraction() * min_side;

		let mut candidates: Vec<(usize, f64)> = nodes
			.iter()
			.enumerate()
			.filter(|&(j, _)| j != i)
			.map(|(j, other)| (j, nodes[i].distance_to(other)))
			.collect();
		candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
		candidates.truncate(target * 2);

		let mut accepted = 0;
		for (j, dist) in candidates {
			// Sorted ascending: nothing further along can be under the ceiling.
			if accepted >= target || dist >= ceiling {
				break;
			}
			let closeness = 1.0 - dist / ceiling;
			let p = (category.acceptance_baseline() + 0.5 * closeness).min(1.0);
			if !rng.gen_bool(p) {
				continue;
			}

			edges.push(Edge {
				source: nodes[i].id.clone(),
				target: nodes[j].id.clone(),
				strength: closeness.max(MIN_STRENGTH),
			});
			link_neighbors(nodes, i, j);
			accepted += 1;
		}
	}

	edges
}

fn link_neighbors(nodes: &mut [Node], a: usize, b: usize) {
	let (id_a, id_b) = (nodes[a].id.clone(), nodes[b].id.clone());
	if !nodes[a].neighbors.contains(&id_b) {
		nodes[a].neighbors.push(id_b);
	}
	if !nodes[b].neighbors.contains(&id_a) {
		nodes[b].neighbors.push(id_a);
	}
}
