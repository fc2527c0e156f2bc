//! Graph construction and analysis: text parsing, algorithms, spring layout
//! and the scene handed to renderers.

mod algorithms;
mod error;
mod layout;
mod model;
mod parser;
mod presets;
mod scene;

pub use algorithms::{AlgorithmKind, AlgorithmResult, StatsResult, format_path, format_score};
pub use error::GraphError;
pub use layout::{DEFAULT_SEED, LayoutConfig, LayoutPositions, Point, layout};
pub use model::{Graph, NodeId, NodeMap, NodeScores};
pub use parser::parse;
pub use presets::{GraphInput, Preset};
pub use scene::{NodeMarker, SceneDescription, to_scene};
