//! Force-directed map of the concepts returned by a search.
//!
//! The query sits pinned in the middle; concepts from the response float
//! around it, joined by the connections the service reported (or to the
//! query when a concept has none).

mod component;
mod render;
mod state;

pub use component::ConceptMap;
pub use state::{ConceptInfo, ConceptMapState, ConceptRole, HighlightState};
