//! Browser-only: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use intel_graph::NetworkCanvas;
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.expect("document");
	let div: HtmlElement = document
		.create_element("div")
		.expect("div")
		.dyn_into()
		.expect("html element");
	document.body().expect("body").append_child(&div).expect("append");
	div
}

fn fire_resize() {
	let window = web_sys::window().expect("window");
	let event = Event::new("resize").expect("event");
	window.dispatch_event(&event).expect("dispatch");
}

#[wasm_bindgen_test]
fn backdrop_survives_mount_resize_unmount_cycles() {
	for _ in 0..3 {
		let handle = mount_to(container(), || {
			view! { <NetworkCanvas fullscreen=true seed=Some(7) /> }
		});
		fire_resize();
		drop(handle);
		fire_resize();
	}
}
