pub mod concept_map;
pub mod network;
pub mod search;
pub mod theme;
