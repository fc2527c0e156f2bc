use thiserror::Error;

use super::model::NodeId;

/// Failures surfaced by the graph engine and the session on top of it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
	/// The nodes or edges text was blank.
	#[error("Nodes and Edges cannot be empty.")]
	EmptyInput,
	/// A shortest-path endpoint is not part of the graph.
	#[error("node '{0}' is not in the graph")]
	NodeNotFound(NodeId),
	/// Both endpoints exist but no edge sequence connects them.
	#[error("no path between '{from}' and '{to}'")]
	NoPath {
		/// Start of the requested path.
		from: NodeId,
		/// End of the requested path.
		to: NodeId,
	},
	/// The operation is only defined for undirected graphs.
	#[error("{0} can only be calculated for undirected graphs")]
	UnsupportedOperation(&'static str),
	/// Shortest path was requested without both endpoints selected.
	#[error("Please select both start and end nodes.")]
	MissingEndpoints,
	/// An algorithm was requested before any graph was submitted.
	#[error("no graph has been submitted")]
	NoGraph,
	/// No preset is registered under this name.
	#[error("unknown preset '{0}'")]
	UnknownPreset(String),
	/// The spring simulation produced a non-finite coordinate.
	#[error("layout diverged at node '{0}'")]
	LayoutDiverged(NodeId),
}
