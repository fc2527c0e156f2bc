use serde::Serialize;

use super::layout::{LayoutPositions, Point};
use super::model::{Graph, NodeId};

/// A labelled point to draw for one node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeMarker {
	/// Node id, also used as the label.
	pub id: NodeId,
	/// Position in layout space.
	pub position: Point,
}

/// Everything a chart needs to draw a graph.
///
/// `edge_path` is a single polyline: each edge contributes its two endpoints
/// followed by a `None` separator, so renderers that understand gaps can draw
/// every edge in one pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SceneDescription {
	/// Whether edges should be drawn with arrowheads.
	pub directed: bool,
	/// Edge endpoints separated by `None`.
	pub edge_path: Vec<Option<Point>>,
	/// Marker indices of each edge's endpoints, in `edge_path` order.
	pub links: Vec<(usize, usize)>,
	/// One marker per positioned node, in node order.
	pub nodes: Vec<NodeMarker>,
}

impl SceneDescription {
	/// Edge segments as `(start, end)` pairs.
	pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
		self.edge_path.split(Option::is_none).filter_map(|run| match run {
			[Some(a), Some(b)] => Some((*a, *b)),
			_ => None,
		})
	}

	/// The edge path split into x and y columns, gaps as `None`.
	pub fn edge_columns(&self) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
		self.edge_path
			.iter()
			.map(|v| (v.map(|p| p.x), v.map(|p| p.y)))
			.unzip()
	}

	/// Marker for `id`, if it was positioned.
	pub fn marker(&self, id: &str) -> Option<&NodeMarker> {
		self.nodes.iter().find(|m| m.id == id)
	}
}

/// Combines a graph with its layout into a drawable scene. Edges or nodes
/// without a position are left out.
pub fn to_scene(graph: &Graph, positions: &LayoutPositions) -> SceneDescription {
	let mut marker_of = vec![None; graph.node_count()];
	let mut nodes = Vec::with_capacity(graph.node_count());
	for (idx, id) in graph.nodes().iter().enumerate() {
		if let Some(&position) = positions.get(id) {
			marker_of[idx] = Some(nodes.len());
			nodes.push(NodeMarker {
				id: id.clone(),
				position,
			});
		}
	}

	let mut edge_path = Vec::with_capacity(graph.edge_count() * 3);
	let mut links = Vec::with_capacity(graph.edge_count());
	for &(src, tgt) in graph.edge_indices() {
		if let (Some(a), Some(b)) = (marker_of[src], marker_of[tgt]) {
			edge_path.extend([Some(nodes[a].position), Some(nodes[b].position), None]);
			links.push((a, b));
		}
	}

	SceneDescription {
		directed: graph.is_directed(),
		edge_path,
		links,
		nodes,
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::graph::parse;

	fn positions() -> LayoutPositions {
		[
			("A".to_owned(), Point::new(-1.0, 0.0)),
			("B".to_owned(), Point::new(0.0, 1.0)),
			("C".to_owned(), Point::new(1.0, 0.0)),
		]
		.into_iter()
		.collect()
	}

	#[test]
	fn edges_are_separated_by_breaks() {
		let g = parse("A, B, C", "A, B\nB, C", false).unwrap();
		let scene = to_scene(&g, &positions());
		assert_eq!(
			scene.edge_path,
			[
				Some(Point::new(-1.0, 0.0)),
				Some(Point::new(0.0, 1.0)),
				None,
				Some(Point::new(0.0, 1.0)),
				Some(Point::new(1.0, 0.0)),
				None,
			]
		);
		assert_eq!(scene.segments().count(), 2);
		assert_eq!(scene.links, [(0, 1), (1, 2)]);
		assert_eq!(scene.nodes.len(), 3);
		assert_eq!(scene.marker("B").map(|m| m.position), Some(Point::new(0.0, 1.0)));
	}

	#[test]
	fn columns_mirror_the_path() {
		let g = parse("A, B", "A, B", true).unwrap();
		let scene = to_scene(&g, &positions());
		let (xs, ys) = scene.edge_columns();
		assert_eq!(xs, [Some(-1.0), Some(0.0), None]);
		assert_eq!(ys, [Some(0.0), Some(1.0), None]);
		assert!(scene.directed);
	}

	#[test]
	fn unpositioned_nodes_are_dropped() {
		let g = parse("A, Z", "A, Z", false).unwrap();
		let scene = to_scene(&g, &positions());
		assert!(scene.edge_path.is_empty());
		assert!(scene.links.is_empty());
		assert_eq!(scene.nodes.len(), 1);
	}
}
