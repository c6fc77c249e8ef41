//! Canvas rendering for the concept map.
//!
//! Passes: background, edges, dimmed nodes, then highlighted nodes and their
//! labels on top.

use std::f64::consts::TAU;

use force_graph::Node;
use web_sys::CanvasRenderingContext2d;

use super::state::{ConceptInfo, ConceptMapState, ConceptRole};
use crate::components::theme::{Color, Theme};

const LABEL_FONT: &str = "500 12px 'Inter', sans-serif";
const QUERY_FONT: &str = "700 13px 'Inter', sans-serif";

fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

pub fn render(state: &ConceptMapState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_fill_style_str(&theme.background.color.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	draw_edges(state, ctx, theme);
	draw_nodes(state, ctx, theme);
}

fn draw_edges(state: &ConceptMapState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let color = theme.concepts.link;

	state.graph.visit_edges(|n1, n2, _| {
		let edge_t = smooth_step(state.highlight.edge_intensity(n1.index(), n2.index()));
		let strength = state.strength(n1.index(), n2.index());
		let alpha = if edge_t > 0.01 {
			0.6 + 0.4 * edge_t
		} else {
			0.6 - 0.4 * max_t
		};

		ctx.set_stroke_style_str(&color.with_alpha(color.a * alpha).to_css());
		ctx.set_line_width(0.8 + 1.6 * strength);
		ctx.begin_path();
		ctx.move_to(n1.x() as f64, n1.y() as f64);
		ctx.line_to(n2.x() as f64, n2.y() as f64);
		ctx.stroke();
	});
}

fn role_color(theme: &Theme, role: ConceptRole) -> Color {
	match role {
		ConceptRole::Query => theme.concepts.query,
		ConceptRole::Main => theme.concepts.main,
		ConceptRole::Secondary => theme.concepts.secondary,
	}
}

fn draw_nodes(state: &ConceptMapState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let dim = 1.0 - 0.6 * max_t;

	state.graph.visit_nodes(|node| {
		if state.highlight.node_intensity(node.index()) > 0.001 {
			return;
		}
		draw_node(ctx, theme, node, dim, 1.0);
	});

	state.graph.visit_nodes(|node| {
		let t = smooth_step(state.highlight.node_intensity(node.index()));
		if t <= 0.001 {
			return;
		}
		let alpha = dim + (1.0 - dim) * t;
		let grow = if state.highlight.hovered_node == Some(node.index()) {
			1.0 + 0.35 * t
		} else {
			1.0 + 0.15 * t
		};
		draw_node(ctx, theme, node, alpha, grow);
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	node: &Node<ConceptInfo>,
	alpha: f64,
	grow: f64,
) {
	let info = &node.data.user_data;
	let (x, y) = (node.x() as f64, node.y() as f64);
	let radius = info.radius() * grow;
	let color = role_color(theme, info.role);

	ctx.set_global_alpha(alpha);
	match ctx.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius) {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, &color.lighten(0.4).to_css());
			let _ = gradient.add_color_stop(1.0, &color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		Err(_) => ctx.set_fill_style_str(&color.to_css()),
	}
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, TAU);
	ctx.fill();

	let font = if info.role == ConceptRole::Query {
		QUERY_FONT
	} else {
		LABEL_FONT
	};
	ctx.set_font(font);
	ctx.set_fill_style_str(&theme.concepts.label.to_css());
	let _ = ctx.fill_text(&info.label, x + radius + 5.0, y + 4.0);
	ctx.set_global_alpha(1.0);
}
