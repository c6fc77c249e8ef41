//! Leptos component wrapping the network backdrop canvas.
//!
//! The component generates a layout sized to its canvas, then runs an
//! animation loop via `requestAnimationFrame` that advances the entrance,
//! hover and pulse animations and redraws every frame. In fullscreen mode a
//! settled window resize throws the layout away and generates a new one.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::ev;
use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::{NetworkState, PendingResize};
use crate::components::theme::Theme;
use crate::layout::{self, Node};

/// Fixed animation step, matching a 60 Hz display.
const FRAME_DT: f64 = 0.016;

struct NetworkContext {
	state: NetworkState,
	theme: Theme,
	resize: PendingResize,
}

impl NetworkContext {
	fn generate(width: f64, height: f64, extended_labels: bool, seed: Option<u64>) -> Self {
		let layout = layout::generate(width, height, extended_labels, &mut fresh_rng(seed));
		info!(
			"network: generated {} nodes / {} edges",
			layout.nodes.len(),
			layout.edges.len()
		);
		Self {
			state: NetworkState::new(layout),
			theme: Theme::default(),
			resize: PendingResize::default(),
		}
	}
}

fn fresh_rng(seed: Option<u64>) -> SmallRng {
	let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * u64::MAX as f64) as u64);
	SmallRng::seed_from_u64(seed)
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |value: Result<JsValue, JsValue>, fallback: f64| {
		value.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
	};
	(dim(window.inner_width(), 800.0), dim(window.inner_height(), 600.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Renders the decorative network on a canvas element.
///
/// The canvas sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and regenerate once a window
/// resize has settled. Pass `seed` to get the same layout on every mount.
/// `on_node_click` receives the node under the pointer when the canvas is
/// clicked.
#[component]
pub fn NetworkCanvas(
	#[prop(default = false)] extended_labels: bool,
	#[prop(default = None)] seed: Option<u64>,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional, into)] on_node_click: Option<Callback<Node>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let hovering = RwSignal::new(false);
	let context: Rc<RefCell<Option<NetworkContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));
	let frame = Arc::new(AtomicI32::new(0));
	let (context_init, animate_init, alive_init, frame_init) =
		(context.clone(), animate, alive.clone(), frame.clone());

	// The canvas follows the window right away; the layout waits for the
	// resize to settle and is regenerated from the animation loop.
	let resize_handle = fullscreen.then(|| {
		let context_resize = context.clone();
		window_event_listener(ev::resize, move |_| {
			let (Some(win), Some(canvas)) = (web_sys::window(), canvas_ref.get_untracked()) else {
				return;
			};
			let canvas: HtmlCanvasElement = canvas.into();
			let (nw, nh) = viewport_size(&win);
			canvas.set_width(nw as u32);
			canvas.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.resize.request(nw, nh);
			}
		})
	});

	on_cleanup(move || {
		alive.store(false, Ordering::Relaxed);
		if let Some(win) = web_sys::window() {
			let _ = win.cancel_animation_frame(frame.load(Ordering::Relaxed));
		}
		if let Some(handle) = resize_handle {
			handle.remove();
		}
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			viewport_size(&window)
		} else {
			let parent = canvas.parent_element();
			(
				width.unwrap_or_else(|| {
					parent
						.as_ref()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					parent
						.as_ref()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("network: canvas has no 2d context");
			return;
		};

		*context_init.borrow_mut() = Some(NetworkContext::generate(w, h, extended_labels, seed));

		// Only the effect holds the loop strongly; it is dropped with the
		// component and the pending frame is cancelled in `on_cleanup`.
		let (context_anim, animate_weak, alive_anim, frame_anim) = (
			context_init.clone(),
			Rc::downgrade(&animate_init),
			alive_init.clone(),
			frame_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !alive_anim.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let current = (c.state.layout.width, c.state.layout.height);
				if let Some((nw, nh)) = c.resize.tick(FRAME_DT, current) {
					debug!("network: resized to {}x{}", nw, nh);
					*c = NetworkContext::generate(nw, nh, extended_labels, seed);
				}
				c.state.tick(FRAME_DT);
				render::render(&c.state, &ctx, &c.theme);
			}
			let Some(slot) = animate_weak.upgrade() else {
				return;
			};
			if let (Some(cb), Some(win)) = (slot.borrow().as_ref(), web_sys::window()) {
				if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					frame_anim.store(id, Ordering::Relaxed);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.store(id, Ordering::Relaxed);
			}
		}
	});

	let pointer = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			let hovered = c.state.node_at_position(x, y);
			c.state.set_hover(hovered);
			if hovering.get_untracked() != hovered.is_some() {
				hovering.set(hovered.is_some());
			}
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.set_hover(None);
		}
		hovering.set(false);
	};

	let context_click = context.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		let clicked = context_click.borrow().as_ref().and_then(|c| {
			c.state
				.node_at_position(x, y)
				.map(|idx| c.state.layout.nodes[idx].clone())
		});
		if let (Some(node), Some(callback)) = (clicked, on_node_click.as_ref()) {
			debug!("network: clicked {}", node.id);
			callback.run(node);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="network-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:click=on_click
			style=move || {
				format!(
					"display: block; cursor: {};",
					if hovering.get() { "pointer" } else { "default" }
				)
			}
		/>
	}
}
