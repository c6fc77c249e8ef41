//! Canvas rendering for the network backdrop.
//!
//! Draw order: background gradient, edges, leaf and minor-hub nodes, hub
//! halos and hubs, hub labels, vignette.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::state::NetworkState;
use crate::components::theme::Theme;

const LABEL_FONT: &str = "600 13px 'Inter', sans-serif";

pub fn render(state: &NetworkState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let (w, h) = (state.layout.width, state.layout.height);
	draw_background(ctx, theme, w, h);
	draw_edges(state, ctx, theme);
	draw_nodes(state, ctx, theme);
	if theme.background.vignette > 0.0 {
		draw_vignette(ctx, theme, w, h);
	}
}

fn draw_background(ctx: &CanvasRenderingContext2d, theme: &Theme, w: f64, h: f64) {
	let (cx, cy) = (w / 2.0, h / 2.0);
	match ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, w.max(h) * 0.8) {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, &theme.background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &theme.background.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		Err(_) => ctx.set_fill_style_str(&theme.background.color.to_css()),
	}
	ctx.fill_rect(0.0, 0.0, w, h);
}

fn draw_vignette(ctx: &CanvasRenderingContext2d, theme: &Theme, w: f64, h: f64) {
	let (cx, cy) = (w / 2.0, h / 2.0);
	let Ok(gradient) =
		ctx.create_radial_gradient(cx, cy, w.min(h) * 0.3, cx, cy, w.max(h) * 0.7)
	else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
	let _ = gradient.add_color_stop(
		1.0,
		&format!("rgba(0, 0, 0, {})", theme.background.vignette),
	);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, w, h);
}

fn draw_edges(state: &NetworkState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let color = theme.network.edge;
	ctx.set_line_width(0.8);

	for (i, edge) in state.edges().iter().enumerate() {
		let alpha = state.edge_alpha(i);
		if alpha < 0.01 {
			continue;
		}
		let (a, b) = (&state.layout.nodes[edge.source], &state.layout.nodes[edge.target]);
		let reveal = state.edge_entrance(i);

		// Edges grow out of their source while they fade in.
		let (x2, y2) = (a.x + (b.x - a.x) * reveal, a.y + (b.y - a.y) * reveal);

		ctx.set_stroke_style_str(&color.with_alpha(color.a * alpha).to_css());
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_nodes(state: &NetworkState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.network;

	for (idx, node) in state.layout.nodes.iter().enumerate() {
		if node.is_hub() {
			continue;
		}
		let radius = state.node_radius(idx);
		if radius < 0.05 {
			continue;
		}
		ctx.set_global_alpha(state.node_alpha(idx));
		ctx.set_fill_style_str(&style.node_color(node.category).to_css());
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, TAU);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);

	// Hubs last so they sit above the crowd.
	for (idx, node) in state.layout.nodes.iter().enumerate() {
		if !node.is_hub() {
			continue;
		}
		let radius = state.node_radius(idx);
		if radius < 0.05 {
			continue;
		}
		let alpha = state.node_alpha(idx);
		draw_hub_glow(ctx, theme, node.x, node.y, radius, alpha);

		ctx.set_global_alpha(alpha);
		ctx.set_fill_style_str(&style.hub.to_css());
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, TAU);
		ctx.fill();

		if let Some(label) = &node.label {
			ctx.set_font(LABEL_FONT);
			ctx.set_fill_style_str(&style.label.with_alpha(alpha).to_css());
			let _ = ctx.fill_text(label, node.x + radius + 6.0, node.y + 4.0);
		}
		ctx.set_global_alpha(1.0);
	}
}

fn draw_hub_glow(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	x: f64,
	y: f64,
	radius: f64,
	alpha: f64,
) {
	let glow_radius = radius * 3.5;
	let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.5, x, y, glow_radius) else {
		return;
	};
	let glow = theme.network.hub_glow;
	let _ = gradient.add_color_stop(0.0, &glow.with_alpha(glow.a * alpha).to_css());
	let _ = gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)");

	ctx.begin_path();
	let _ = ctx.arc(x, y, glow_radius, 0.0, TAU);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}
