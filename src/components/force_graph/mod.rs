//! Canvas renderer for a [`SceneDescription`](crate::graph::SceneDescription).
//!
//! Positions come from the spring layout; the canvas adds pan, zoom, hover
//! highlighting of a node's neighbourhood and an animated shortest path.

mod component;
mod render;
mod state;

pub use component::ForceGraphCanvas;
