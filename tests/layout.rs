use std::collections::{BTreeSet, HashSet};

use intel_graph::layout::{self, EXTENDED_HUB_LABELS, HUB_LABELS, MAX_NODES, MIN_NODES};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn hub_labels(layout: &intel_graph::Layout) -> BTreeSet<String> {
	layout.hubs().filter_map(|n| n.label.clone()).collect()
}

#[test]
fn default_canvas_gets_the_default_vocabulary() {
	let mut rng = SmallRng::seed_from_u64(800600);
	let layout = layout::generate(800.0, 600.0, false, &mut rng);

	assert_eq!(layout.nodes.len(), 120);
	let expected: BTreeSet<String> = HUB_LABELS.iter().map(|s| s.to_string()).collect();
	assert_eq!(hub_labels(&layout), expected);
}

#[test]
fn extended_flag_switches_vocabulary() {
	let mut rng = SmallRng::seed_from_u64(3);
	let layout = layout::generate(1280.0, 800.0, true, &mut rng);

	let expected: BTreeSet<String> = EXTENDED_HUB_LABELS.iter().map(|s| s.to_string()).collect();
	assert_eq!(hub_labels(&layout), expected);
}

#[test]
fn invariants_hold_across_sizes() {
	let sizes = [(320.0, 240.0), (800.0, 600.0), (1024.0, 768.0), (1920.0, 1080.0), (3840.0, 2160.0)];
	for (i, &(w, h)) in sizes.iter().enumerate() {
		let mut rng = SmallRng::seed_from_u64(i as u64);
		let layout = layout::generate(w, h, i % 2 == 0, &mut rng);

		let expected = ((w * h / 4000.0).floor() as usize).clamp(MIN_NODES, MAX_NODES);
		assert_eq!(layout.nodes.len(), expected, "{w}x{h}");

		let ids: HashSet<&str> = layout.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), layout.nodes.len());
		for edge in &layout.edges {
			assert!(ids.contains(edge.source.as_str()));
			assert!(ids.contains(edge.target.as_str()));
			assert!(edge.strength > 0.0 && edge.strength <= 1.0);
		}

		assert_eq!(layout.hubs().count(), 5);
		let silhouette = layout.silhouette();
		for node in &layout.nodes {
			assert!(silhouette.normalized_distance(node.x, node.y) <= 1.0 + 1e-9);
		}
	}
}

#[test]
fn same_seed_same_layout() {
	let a = layout::generate(1024.0, 768.0, false, &mut SmallRng::seed_from_u64(99));
	let b = layout::generate(1024.0, 768.0, false, &mut SmallRng::seed_from_u64(99));
	assert_eq!(a, b);
}
