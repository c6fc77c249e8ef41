//! Leptos component wrapping the concept map canvas.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::ConceptMapState;
use crate::components::theme::Theme;
use crate::search::SearchResults;

struct MapContext {
	state: ConceptMapState,
	theme: Theme,
}

/// Draws the concepts of `results` as a small force-directed graph around
/// the query. Concepts can be dragged around; hovering one highlights its
/// neighbours.
///
/// The map is built once per mount; the results panel mounts a fresh map for
/// every result set.
#[component]
pub fn ConceptMap(
	results: SearchResults,
	#[prop(default = 520.0)] width: f64,
	#[prop(default = 320.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<MapContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let alive = Arc::new(AtomicBool::new(true));
	let frame = Arc::new(AtomicI32::new(0));
	let (context_init, animate_init, alive_init, frame_init) =
		(context.clone(), animate, alive.clone(), frame.clone());

	on_cleanup(move || {
		alive.store(false, Ordering::Relaxed);
		if let Some(win) = web_sys::window() {
			let _ = win.cancel_animation_frame(frame.load(Ordering::Relaxed));
		}
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("concept map: canvas has no 2d context");
			return;
		};

		debug!(
			"concept map: {} concepts, {} links",
			results.concepts.len(),
			results.links.len()
		);
		*context_init.borrow_mut() = Some(MapContext {
			state: ConceptMapState::new(
				&results.query,
				&results.concepts,
				&results.links,
				width,
				height,
			),
			theme: Theme::default(),
		});

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
				c.state.tick(0.016);
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
		if let (Some(cb), Some(win)) = (animate_init.borrow().as_ref(), web_sys::window()) {
			if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
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

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.state.start_drag(x, y);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.state.is_dragging() {
				c.state.drag_to(x, y);
			} else {
				let hovered = c.state.node_at_position(x, y);
				c.state.set_hover(hovered);
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			c.state.end_drag();
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.end_drag();
			c.state.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="concept-map-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}
