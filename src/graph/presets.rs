use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::GraphError;

/// Raw form input for one graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GraphInput {
	/// Comma-separated node ids.
	pub nodes_text: String,
	/// One `source, target` pair per line.
	pub edges_text: String,
	/// Whether edges are one-way.
	pub directed: bool,
}

impl GraphInput {
	/// Builds an input from the two text fields and the direction flag.
	pub fn new(nodes_text: impl Into<String>, edges_text: impl Into<String>, directed: bool) -> Self {
		Self {
			nodes_text: nodes_text.into(),
			edges_text: edges_text.into(),
			directed,
		}
	}
}

/// Built-in example graphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
	/// Five people and their friendships.
	SocialNetwork,
	/// Complete binary tree of depth two.
	Tree,
	/// Five nodes in a ring.
	Cycle,
	/// K4.
	CompleteGraph,
}

impl Preset {
	/// Every preset, in the order the form lists them.
	pub const ALL: [Preset; 4] = [
		Preset::SocialNetwork,
		Preset::Tree,
		Preset::Cycle,
		Preset::CompleteGraph,
	];

	/// Name the preset is loaded by.
	pub fn name(self) -> &'static str {
		match self {
			Self::SocialNetwork => "social_network",
			Self::Tree => "tree",
			Self::Cycle => "cycle",
			Self::CompleteGraph => "complete_graph",
		}
	}

	/// Button label.
	pub fn label(self) -> &'static str {
		match self {
			Self::SocialNetwork => "Social Network",
			Self::Tree => "Tree",
			Self::Cycle => "Cycle",
			Self::CompleteGraph => "Complete",
		}
	}

	/// `(nodes_text, edges_text)` of the preset.
	pub fn texts(self) -> (&'static str, &'static str) {
		match self {
			Self::SocialNetwork => (
				"Alice, Bob, Charlie, David, Eve",
				"Alice, Bob\nAlice, Charlie\nBob, Charlie\nBob, David\nCharlie, David\nDavid, Eve",
			),
			Self::Tree => ("A, B, C, D, E, F, G", "A, B\nA, C\nB, D\nB, E\nC, F\nC, G"),
			Self::Cycle => ("1, 2, 3, 4, 5", "1, 2\n2, 3\n3, 4\n4, 5\n5, 1"),
			Self::CompleteGraph => ("X, Y, Z, W", "X, Y\nX, Z\nX, W\nY, Z\nY, W\nZ, W"),
		}
	}

	/// The preset as form input with the given direction.
	pub fn input(self, directed: bool) -> GraphInput {
		let (nodes, edges) = self.texts();
		GraphInput::new(nodes, edges, directed)
	}
}

impl fmt::Display for Preset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Preset {
	type Err = GraphError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|p| p.name() == s)
			.ok_or_else(|| GraphError::UnknownPreset(s.to_owned()))
	}
}
