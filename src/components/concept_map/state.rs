//! Simulation and interaction state for the concept map.
//!
//! Wraps a `force_graph` simulation holding the concepts of one search
//! result around an anchored query node, plus hover highlighting and node
//! dragging.

use std::collections::{HashMap, HashSet};
use std::f64::consts::TAU;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::api::{ConceptLink, ConceptNode};

/// Radius of a concept with size 1.0, in pixels.
pub const BASE_RADIUS: f64 = 9.0;
/// Distance from the centre at which concepts start out.
const START_RING: f64 = 110.0;
const HIT_PADDING: f64 = 4.0;

/// What a node on the map stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConceptRole {
	/// The submitted query, pinned at the centre.
	Query,
	Main,
	Secondary,
}

/// Display metadata attached to each simulated node.
#[derive(Clone, Debug)]
pub struct ConceptInfo {
	/// Concept id from the response; empty for the query node.
	pub id: String,
	pub label: String,
	pub role: ConceptRole,
	/// Size multiplier applied to [`BASE_RADIUS`].
	pub size: f64,
}

impl ConceptInfo {
	pub fn radius(&self) -> f64 {
		BASE_RADIUS * self.size
	}
}

/// Hovered node plus neighbours, faded in and out smoothly.
#[derive(Clone, Debug, Default)]
pub struct HighlightState {
	pub hovered_node: Option<DefaultNodeIdx>,
	target_set: HashSet<DefaultNodeIdx>,
	node_intensity: HashMap<DefaultNodeIdx, f64>,
	cached_max: f64,
}

impl HighlightState {
	pub fn set_hover(
		&mut self,
		node: Option<DefaultNodeIdx>,
		edges: &[(DefaultNodeIdx, DefaultNodeIdx)],
	) {
		if self.hovered_node == node {
			return;
		}
		self.hovered_node = node;
		self.target_set.clear();

		if let Some(idx) = node {
			self.target_set.insert(idx);
			for &(src, tgt) in edges {
				if src == idx {
					self.target_set.insert(tgt);
				} else if tgt == idx {
					self.target_set.insert(src);
				}
			}
		}
	}

	pub fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 6.0;
		const FADE_OUT_SPEED: f64 = 4.0;

		let fade_in = 1.0 - (-FADE_IN_SPEED * dt).exp();
		let decay = (-FADE_OUT_SPEED * dt).exp();

		for &idx in &self.target_set {
			let value = self.node_intensity.entry(idx).or_insert(0.0);
			*value += (1.0 - *value) * fade_in;
		}

		let mut max: f64 = 0.0;
		let targets = &self.target_set;
		self.node_intensity.retain(|idx, value| {
			if !targets.contains(idx) {
				*value *= decay;
			}
			max = max.max(*value);
			*value > 0.005
		});
		self.cached_max = max;
	}

	pub fn node_intensity(&self, idx: DefaultNodeIdx) -> f64 {
		self.node_intensity.get(&idx).copied().unwrap_or(0.0)
	}

	/// Geometric mean of both endpoint intensities.
	pub fn edge_intensity(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> f64 {
		(self.node_intensity(a) * self.node_intensity(b)).sqrt()
	}

	pub fn max_intensity(&self) -> f64 {
		self.cached_max
	}
}

/// An in-progress node drag.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub node_idx: Option<DefaultNodeIdx>,
	pub offset_x: f64,
	pub offset_y: f64,
}

/// Force-directed map of one search result.
pub struct ConceptMapState {
	pub graph: ForceGraph<ConceptInfo, ()>,
	pub highlight: HighlightState,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
	pub time: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	strengths: HashMap<(DefaultNodeIdx, DefaultNodeIdx), f64>,
}

impl ConceptMapState {
	/// Build the map for `query`.
	///
	/// Links naming unknown concepts, and self links, are dropped. Every
	/// concept left without any link is tied to the query node, so the map is
	/// always connected.
	pub fn new(
		query: &str,
		concepts: &[ConceptNode],
		links: &[ConceptLink],
		width: f64,
		height: f64,
	) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 220.0,
			force_spring: 0.06,
			force_max: 80.0,
			node_speed: 2500.0,
			damping_factor: 0.88,
		});
		let (cx, cy) = (width / 2.0, height / 2.0);

		let centre = graph.add_node(NodeData {
			x: cx as f32,
			y: cy as f32,
			mass: 20.0,
			is_anchor: true,
			user_data: ConceptInfo {
				id: String::new(),
				label: query.to_string(),
				role: ConceptRole::Query,
				size: 1.8,
			},
		});

		let mut id_to_idx = HashMap::new();
		for (i, concept) in concepts.iter().enumerate() {
			if id_to_idx.contains_key(concept.id.as_str()) {
				continue;
			}
			let angle = i as f64 * TAU / concepts.len() as f64;
			let (role, size) = if concept.is_main() {
				(ConceptRole::Main, 1.3)
			} else {
				(ConceptRole::Secondary, 1.0)
			};
			let idx = graph.add_node(NodeData {
				x: (cx + START_RING * angle.cos()) as f32,
				y: (cy + START_RING * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: ConceptInfo {
					id: concept.id.clone(),
					label: concept.label.clone(),
					role,
					size,
				},
			});
			id_to_idx.insert(concept.id.as_str(), idx);
		}

		let mut edges = Vec::new();
		let mut strengths = HashMap::new();
		let mut linked = HashSet::new();
		for link in links {
			let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) else {
				continue;
			};
			if src == tgt || strengths.contains_key(&(src, tgt)) {
				continue;
			}
			graph.add_edge(src, tgt, EdgeData::default());
			edges.push((src, tgt));
			strengths.insert((src, tgt), link.strength.clamp(0.0, 1.0));
			linked.insert(src);
			linked.insert(tgt);
		}

		for concept in concepts {
			let Some(&idx) = id_to_idx.get(concept.id.as_str()) else {
				continue;
			};
			if linked.insert(idx) {
				graph.add_edge(centre, idx, EdgeData::default());
				edges.push((centre, idx));
				strengths.insert((centre, idx), 0.5);
			}
		}

		Self {
			graph,
			highlight: HighlightState::default(),
			drag: DragState::default(),
			width,
			height,
			time: 0.0,
			edges,
			strengths,
		}
	}

	/// Number of simulated nodes, the query node included.
	pub fn node_count(&self) -> usize {
		let mut count = 0;
		self.graph.visit_nodes(|_| count += 1);
		count
	}

	pub fn edges(&self) -> &[(DefaultNodeIdx, DefaultNodeIdx)] {
		&self.edges
	}

	/// Strength of the edge between `a` and `b`, in either direction.
	pub fn strength(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> f64 {
		self.strengths
			.get(&(a, b))
			.or_else(|| self.strengths.get(&(b, a)))
			.copied()
			.unwrap_or(0.5)
	}

	/// Current position and metadata of the node with concept id `id`.
	pub fn concept(&self, id: &str) -> Option<(DefaultNodeIdx, f64, f64, ConceptInfo)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let info = &node.data.user_data;
			if info.role != ConceptRole::Query && info.id == id {
				found = Some((node.index(), node.x() as f64, node.y() as f64, info.clone()));
			}
		});
		found
	}

	pub fn node_at_position(&self, x: f64, y: f64) -> Option<DefaultNodeIdx> {
		let mut best: Option<(DefaultNodeIdx, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - x, node.y() as f64 - y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist <= node.data.user_data.radius() + HIT_PADDING
				&& best.is_none_or(|(_, d)| dist < d)
			{
				best = Some((node.index(), dist));
			}
		});
		best.map(|(idx, _)| idx)
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		self.highlight.set_hover(node, &self.edges);
	}

	/// Grab the node under `(x, y)`. Returns whether a node was grabbed.
	pub fn start_drag(&mut self, x: f64, y: f64) -> bool {
		let Some(idx) = self.node_at_position(x, y) else {
			return false;
		};
		let mut offset = (0.0, 0.0);
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				offset = (node.x() as f64 - x, node.y() as f64 - y);
			}
		});
		self.drag = DragState {
			node_idx: Some(idx),
			offset_x: offset.0,
			offset_y: offset.1,
		};
		true
	}

	/// Move the dragged node, if any, so it follows the pointer.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		let (nx, ny) = (
			(x + self.drag.offset_x).clamp(0.0, self.width) as f32,
			(y + self.drag.offset_y).clamp(0.0, self.height) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	/// Release the dragged node back into the simulation. The query node stays
	/// pinned.
	pub fn end_drag(&mut self) {
		let Some(idx) = self.drag.node_idx.take() else {
			return;
		};
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = node.data.user_data.role == ConceptRole::Query;
			}
		});
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.node_idx.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.time += dt as f64;
		self.highlight.tick(dt as f64);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn concept(id: &str, kind: Option<&str>) -> ConceptNode {
		ConceptNode {
			id: id.into(),
			label: id.to_uppercase(),
			kind: kind.map(str::to_string),
			description: None,
		}
	}

	fn link(source: &str, target: &str) -> ConceptLink {
		ConceptLink {
			source: source.into(),
			target: target.into(),
			strength: 0.9,
		}
	}

	#[test]
	fn query_node_is_added_at_the_centre() {
		let state = ConceptMapState::new("ev", &[concept("a", None)], &[], 400.0, 300.0);
		assert_eq!(state.node_count(), 2);

		let mut centre = None;
		state.graph.visit_nodes(|node| {
			if node.data.user_data.role == ConceptRole::Query {
				centre = Some((node.x(), node.y(), node.data.user_data.label.clone()));
			}
		});
		assert_eq!(centre, Some((200.0, 150.0, "ev".to_string())));
	}

	#[test]
	fn unlinked_concepts_hang_off_the_query() {
		let concepts = [concept("a", Some("main")), concept("b", None)];
		let state = ConceptMapState::new("q", &concepts, &[], 400.0, 300.0);
		assert_eq!(state.edges().len(), 2);
		assert_eq!(state.concept("a").map(|c| c.3.role), Some(ConceptRole::Main));
		assert_eq!(state.concept("b").map(|c| c.3.role), Some(ConceptRole::Secondary));
	}

	#[test]
	fn links_are_resolved_and_unknown_ids_dropped() {
		let concepts = [concept("a", None), concept("b", None), concept("c", None)];
		let links = [link("a", "b"), link("a", "ghost"), link("b", "b")];
		let state = ConceptMapState::new("q", &concepts, &links, 400.0, 300.0);

		// a-b from the response, c tied to the centre.
		assert_eq!(state.edges().len(), 2);
		let (Some(a), Some(b)) = (state.concept("a"), state.concept("b")) else {
			panic!("concepts missing");
		};
		assert!((state.strength(b.0, a.0) - 0.9).abs() < 1e-9);
	}

	#[test]
	fn duplicate_concepts_are_added_once() {
		let concepts = [concept("a", None), concept("a", None)];
		let state = ConceptMapState::new("q", &concepts, &[], 400.0, 300.0);
		assert_eq!(state.node_count(), 2);
	}

	#[test]
	fn hovering_highlights_neighbours() {
		let concepts = [concept("a", None), concept("b", None), concept("c", None)];
		let mut state = ConceptMapState::new("q", &concepts, &[link("a", "b")], 400.0, 300.0);
		let (Some(a), Some(b), Some(c)) = (state.concept("a"), state.concept("b"), state.concept("c"))
		else {
			panic!("concepts missing");
		};

		state.set_hover(Some(a.0));
		for _ in 0..30 {
			state.highlight.tick(0.016);
		}
		assert!(state.highlight.node_intensity(a.0) > 0.9);
		assert!(state.highlight.node_intensity(b.0) > 0.9);
		assert_eq!(state.highlight.node_intensity(c.0), 0.0);

		state.set_hover(None);
		for _ in 0..200 {
			state.highlight.tick(0.016);
		}
		assert_eq!(state.highlight.max_intensity(), 0.0);
	}

	#[test]
	fn dragging_moves_and_releases_a_concept() {
		let mut state = ConceptMapState::new("q", &[concept("a", None)], &[], 400.0, 300.0);
		let Some((idx, x, y, _)) = state.concept("a") else {
			panic!("concept missing");
		};

		assert!(state.start_drag(x + 2.0, y));
		assert_eq!(state.drag.node_idx, Some(idx));
		state.drag_to(52.0, 60.0);
		let Some((_, nx, ny, _)) = state.concept("a") else {
			panic!("concept missing");
		};
		assert!((nx - 50.0).abs() < 1e-3 && (ny - 60.0).abs() < 1e-3);

		state.end_drag();
		assert!(!state.is_dragging());
		let mut anchored = None;
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				anchored = Some(node.data.is_anchor);
			}
		});
		assert_eq!(anchored, Some(false));
	}

	#[test]
	fn empty_space_starts_no_drag() {
		let mut state = ConceptMapState::new("q", &[], &[], 400.0, 300.0);
		assert!(!state.start_drag(5.0, 5.0));
		assert_eq!(state.node_count(), 1);
	}
}
