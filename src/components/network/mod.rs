//! Decorative network backdrop.
//!
//! Draws a procedurally generated [`Layout`](crate::layout::Layout) on a
//! canvas with:
//! - staggered fade/scale-in entrance, nodes in index order, edges trailing
//! - hover growth and brightening with smooth fade in/out
//! - a slow opacity pulse on hub nodes
//! - a click callback carrying the clicked [`Node`](crate::layout::Node)
//!
//! # Example
//!
//! ```ignore
//! use intel_graph::components::network::NetworkCanvas;
//!
//! view! {
//!     <NetworkCanvas
//!         fullscreen=true
//!         on_node_click=move |node: Node| log::info!("{}", node.id)
//!     />
//! }
//! ```

mod component;
mod render;
mod state;

pub use component::NetworkCanvas;
pub use state::{EdgeRef, HoverState, NetworkState, PendingResize, entrance_progress};
