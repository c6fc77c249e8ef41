//! Animation and interaction state for the network backdrop.
//!
//! Holds a generated [`Layout`] plus everything that changes frame to frame:
//! the animation clock, per-node hover intensity, and the resolved edge
//! endpoints. Nothing in here touches the DOM.

use std::collections::HashMap;

use crate::layout::{Layout, NodeCategory};

/// Delay between the entrance of node `i` and node `i + 1`, in seconds.
pub const ENTRANCE_STAGGER: f64 = 0.008;
/// Length of one element's fade/scale-in.
pub const ENTRANCE_DURATION: f64 = 0.6;
/// Extra delay for an edge after its later endpoint starts appearing.
const EDGE_LAG: f64 = 0.15;

const HUB_PULSE_SPEED: f64 = 1.1;
const HUB_PULSE_DEPTH: f64 = 0.3;

/// Radius multiplier gained at full hover.
const HOVER_RADIUS_GAIN: f64 = 0.6;
/// Screen pixels added around a node for hit testing.
const HIT_PADDING: f64 = 6.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Entrance progress in `[0, 1]` for an element that starts at `delay`.
pub fn entrance_progress(time: f64, delay: f64) -> f64 {
	ease_out_cubic(((time - delay) / ENTRANCE_DURATION).clamp(0.0, 1.0))
}

/// Smoothed hover intensity per node.
///
/// The hovered node fades towards 1.0 and everything else decays towards 0.0
/// with exponential smoothing, so moving between nodes cross-fades instead
/// of snapping.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	intensity: HashMap<usize, f64>,
}

impl HoverState {
	pub fn set(&mut self, node: Option<usize>) {
		self.node = node;
	}

	pub fn tick(&mut self, dt: f64) {
		const FADE_IN_SPEED: f64 = 10.0;
		const FADE_OUT_SPEED: f64 = 5.0;

		if let Some(idx) = self.node {
			let value = self.intensity.entry(idx).or_insert(0.0);
			*value += (1.0 - *value) * (1.0 - (-FADE_IN_SPEED * dt).exp());
		}

		let decay = (-FADE_OUT_SPEED * dt).exp();
		let hovered = self.node;
		self.intensity.retain(|idx, value| {
			if hovered == Some(*idx) {
				return true;
			}
			*value *= decay;
			*value > 0.005
		});
	}

	pub fn intensity(&self, idx: usize) -> f64 {
		self.intensity.get(&idx).copied().unwrap_or(0.0)
	}
}

/// Quiet time after the last resize event before a new layout is generated.
pub const RESIZE_SETTLE: f64 = 0.25;

/// Collapses a burst of resize events into one regeneration.
///
/// Each [`request`](Self::request) restarts the quiet timer; [`tick`](Self::tick)
/// hands out the last requested size once nothing new arrived for
/// [`RESIZE_SETTLE`] seconds, and only if it differs from the current size
/// by at least a pixel.
#[derive(Clone, Debug, Default)]
pub struct PendingResize {
	size: Option<(f64, f64)>,
	quiet: f64,
}

impl PendingResize {
	pub fn request(&mut self, width: f64, height: f64) {
		self.size = Some((width, height));
		self.quiet = 0.0;
	}

	pub fn is_pending(&self) -> bool {
		self.size.is_some()
	}

	pub fn tick(&mut self, dt: f64, current: (f64, f64)) -> Option<(f64, f64)> {
		self.size?;
		self.quiet += dt;
		if self.quiet < RESIZE_SETTLE {
			return None;
		}
		let (w, h) = self.size.take()?;
		let changed = (w - current.0).abs() >= 1.0 || (h - current.1).abs() >= 1.0;
		changed.then_some((w, h))
	}
}

/// An edge with its endpoints resolved to node indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRef {
	pub source: usize,
	pub target: usize,
	pub strength: f64,
}

/// A generated layout being animated on screen.
pub struct NetworkState {
	pub layout: Layout,
	pub hover: HoverState,
	/// Seconds since the layout was installed.
	pub time: f64,
	edges: Vec<EdgeRef>,
}

impl NetworkState {
	pub fn new(layout: Layout) -> Self {
		let index: HashMap<&str, usize> = layout
			.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.as_str(), i))
			.collect();
		let edges = layout
			.edges
			.iter()
			.filter_map(|e| {
				Some(EdgeRef {
					source: *index.get(e.source.as_str())?,
					target: *index.get(e.target.as_str())?,
					strength: e.strength,
				})
			})
			.collect();

		Self {
			layout,
			hover: HoverState::default(),
			time: 0.0,
			edges,
		}
	}

	/// Edges whose endpoints both exist, in layout order.
	pub fn edges(&self) -> &[EdgeRef] {
		&self.edges
	}

	pub fn tick(&mut self, dt: f64) {
		self.time += dt;
		self.hover.tick(dt);
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		self.hover.set(node);
	}

	pub fn node_entrance(&self, idx: usize) -> f64 {
		entrance_progress(self.time, idx as f64 * ENTRANCE_STAGGER)
	}

	pub fn edge_entrance(&self, edge: usize) -> f64 {
		let Some(e) = self.edges.get(edge) else {
			return 0.0;
		};
		let delay = e.source.max(e.target) as f64 * ENTRANCE_STAGGER + EDGE_LAG;
		entrance_progress(self.time, delay)
	}

	/// Opacity multiplier from the slow hub oscillation; 1.0 for other nodes.
	pub fn hub_pulse(&self, idx: usize) -> f64 {
		match self.layout.nodes.get(idx) {
			Some(node) if node.category == NodeCategory::Hub => {
				let wave = 0.5 + 0.5 * (self.time * HUB_PULSE_SPEED + idx as f64).sin();
				1.0 - HUB_PULSE_DEPTH * wave
			}
			_ => 1.0,
		}
	}

	/// On-screen radius including entrance scale and hover growth.
	pub fn node_radius(&self, idx: usize) -> f64 {
		let Some(node) = self.layout.nodes.get(idx) else {
			return 0.0;
		};
		node.radius * self.node_entrance(idx) * (1.0 + HOVER_RADIUS_GAIN * self.hover.intensity(idx))
	}

	/// On-screen opacity including entrance fade, hub pulse and hover.
	pub fn node_alpha(&self, idx: usize) -> f64 {
		let Some(node) = self.layout.nodes.get(idx) else {
			return 0.0;
		};
		let base = match node.category {
			NodeCategory::Hub => 0.95,
			NodeCategory::MinorHub => 0.8,
			NodeCategory::Leaf => 0.55,
		};
		let hover = self.hover.intensity(idx);
		let resting = base * self.hub_pulse(idx);
		self.node_entrance(idx) * (resting + (1.0 - resting) * hover)
	}

	/// Opacity of edge `edge`, brightened when either end is hovered.
	pub fn edge_alpha(&self, edge: usize) -> f64 {
		let Some(e) = self.edges.get(edge) else {
			return 0.0;
		};
		let hover = self.hover.intensity(e.source).max(self.hover.intensity(e.target));
		let resting = 0.15 + 0.35 * e.strength;
		self.edge_entrance(edge) * (resting + (1.0 - resting) * 0.8 * hover)
	}

	/// Topmost visible node under canvas position `(x, y)`.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<usize> {
		let mut best: Option<(usize, f64)> = None;
		for (idx, node) in self.layout.nodes.iter().enumerate() {
			if self.node_entrance(idx) <= 0.0 {
				continue;
			}
			let (dx, dy) = (node.x - x, node.y - y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist <= node.radius + HIT_PADDING && best.is_none_or(|(_, d)| dist < d) {
				best = Some((idx, dist));
			}
		}
		best.map(|(idx, _)| idx)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layout::{Edge, Node};

	fn node(id: &str, x: f64, y: f64, category: NodeCategory) -> Node {
		Node {
			id: id.into(),
			x,
			y,
			radius: if category == NodeCategory::Hub { 8.0 } else { 2.0 },
			label: (category == NodeCategory::Hub).then(|| id.to_uppercase()),
			category,
			neighbors: Vec::new(),
		}
	}

	fn sample() -> NetworkState {
		NetworkState::new(Layout {
			width: 400.0,
			height: 300.0,
			nodes: vec![
				node("h", 100.0, 100.0, NodeCategory::Hub),
				node("m", 150.0, 100.0, NodeCategory::MinorHub),
				node("l", 300.0, 200.0, NodeCategory::Leaf),
			],
			edges: vec![
				Edge {
					source: "h".into(),
					target: "l".into(),
					strength: 0.5,
				},
				Edge {
					source: "m".into(),
					target: "ghost".into(),
					strength: 1.0,
				},
			],
		})
	}

	fn run_for(state: &mut NetworkState, seconds: f64) {
		let steps = (seconds / 0.016).ceil() as usize;
		for _ in 0..steps {
			state.tick(0.016);
		}
	}

	#[test]
	fn entrance_is_staggered_by_index() {
		let mut state = sample();
		assert_eq!(state.node_entrance(0), 0.0);
		state.time = ENTRANCE_STAGGER * 1.5;
		assert!(state.node_entrance(0) > 0.0);
		assert_eq!(state.node_entrance(2), 0.0);
		state.time = 5.0;
		assert_eq!(state.node_entrance(2), 1.0);
	}

	#[test]
	fn entrance_progress_is_monotonic() {
		let mut last = 0.0;
		for step in 0..100 {
			let p = entrance_progress(step as f64 * 0.01, 0.1);
			assert!(p >= last);
			last = p;
		}
		assert_eq!(last, 1.0);
	}

	#[test]
	fn edges_trail_their_later_endpoint() {
		let mut state = sample();
		state.time = 2.0 * ENTRANCE_STAGGER + EDGE_LAG * 0.5;
		assert!(state.node_entrance(2) > 0.0);
		assert_eq!(state.edge_entrance(0), 0.0);
		state.time = 5.0;
		assert_eq!(state.edge_entrance(0), 1.0);
	}

	#[test]
	fn unresolved_edges_are_skipped() {
		let state = sample();
		let edges = state.edges();
		assert_eq!(edges.len(), 1);
		assert_eq!((edges[0].source, edges[0].target), (0, 2));
	}

	#[test]
	fn only_hubs_pulse() {
		let mut state = sample();
		let mut seen_low = false;
		for step in 0..200 {
			state.time = step as f64 * 0.05;
			let pulse = state.hub_pulse(0);
			assert!((1.0 - HUB_PULSE_DEPTH - 1e-9..=1.0 + 1e-9).contains(&pulse));
			seen_low |= pulse < 0.8;
			assert_eq!(state.hub_pulse(1), 1.0);
			assert_eq!(state.hub_pulse(2), 1.0);
		}
		assert!(seen_low);
	}

	#[test]
	fn hover_grows_then_releases_a_node() {
		let mut state = sample();
		state.time = 5.0;
		let (radius, alpha) = (state.node_radius(2), state.node_alpha(2));

		state.set_hover(Some(2));
		run_for(&mut state, 0.5);
		assert!(state.node_radius(2) > radius * 1.4);
		assert!(state.node_alpha(2) > alpha);
		assert!(state.node_alpha(2) <= 1.0);

		state.set_hover(None);
		run_for(&mut state, 2.0);
		assert_eq!(state.hover.intensity(2), 0.0);
		assert!((state.node_radius(2) - radius).abs() < 1e-9);
	}

	#[test]
	fn hovering_an_endpoint_brightens_its_edge() {
		let mut state = sample();
		state.time = 5.0;
		let resting = state.edge_alpha(0);
		state.set_hover(Some(0));
		run_for(&mut state, 0.5);
		assert!(state.edge_alpha(0) > resting);
	}

	fn settle(pending: &mut PendingResize, current: (f64, f64), seconds: f64) -> Option<(f64, f64)> {
		let mut out = None;
		for _ in 0..(seconds / 0.016).ceil() as usize {
			out = out.or(pending.tick(0.016, current));
		}
		out
	}

	#[test]
	fn resize_burst_regenerates_once_after_settling() {
		let mut pending = PendingResize::default();
		let current = (800.0, 600.0);
		for step in 0..30 {
			pending.request(800.0 + step as f64 * 10.0, 600.0);
			assert_eq!(pending.tick(0.016, current), None);
		}
		assert_eq!(settle(&mut pending, current, RESIZE_SETTLE * 0.5), None);
		assert_eq!(settle(&mut pending, current, RESIZE_SETTLE), Some((1090.0, 600.0)));
		assert!(!pending.is_pending());
		assert_eq!(settle(&mut pending, current, 1.0), None);
	}

	#[test]
	fn resize_back_to_the_same_size_is_dropped() {
		let mut pending = PendingResize::default();
		pending.request(1000.0, 700.0);
		pending.request(800.4, 600.0);
		assert_eq!(settle(&mut pending, (800.0, 600.0), 1.0), None);
		assert!(!pending.is_pending());
	}

	#[test]
	fn hit_testing_picks_the_closest_visible_node() {
		let mut state = sample();
		assert_eq!(state.node_at_position(100.0, 100.0), None);

		state.time = 5.0;
		assert_eq!(state.node_at_position(102.0, 101.0), Some(0));
		assert_eq!(state.node_at_position(148.0, 100.0), Some(1));
		assert_eq!(state.node_at_position(10.0, 10.0), None);
	}
}
