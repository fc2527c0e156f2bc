//! Queries over a built [`Graph`]. All edges weigh one.

use std::collections::VecDeque;

use serde::Serialize;

use super::error::GraphError;
use super::model::{Graph, NodeId, NodeScores};

/// Which algorithm produced an [`AlgorithmResult`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
	/// Breadth-first shortest path.
	ShortestPath,
	/// Normalised degree per node.
	DegreeCentrality,
	/// Local clustering coefficient per node.
	Clustering,
	/// Descriptive statistics.
	Stats,
}

impl AlgorithmKind {
	/// Title used when displaying a result of this kind.
	pub fn title(self) -> &'static str {
		match self {
			Self::ShortestPath => "Shortest Path",
			Self::DegreeCentrality => "Degree Centrality",
			Self::Clustering => "Clustering Coefficient",
			Self::Stats => "Graph Statistics",
		}
	}
}

/// Descriptive statistics of a graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatsResult {
	/// Number of nodes.
	pub node_count: usize,
	/// Number of edges.
	pub edge_count: usize,
	/// Edges over possible edges.
	pub density: f64,
	/// Mean local clustering; `None` for directed graphs.
	pub avg_clustering: Option<f64>,
}

impl StatsResult {
	/// Key-value rows for display, formatted to four decimals.
	pub fn entries(&self) -> Vec<(&'static str, String)> {
		vec![
			("Nodes", self.node_count.to_string()),
			("Edges", self.edge_count.to_string()),
			("Density", format_score(self.density)),
			(
				"Avg. Clustering",
				self.avg_clustering
					.map(format_score)
					.unwrap_or_else(|| "N/A".to_owned()),
			),
		]
	}
}

/// Output of one algorithm run.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AlgorithmResult {
	/// Node sequence from start to end.
	Path(Vec<NodeId>),
	/// Degree centrality per node.
	Centrality(NodeScores),
	/// Clustering coefficient per node.
	Clustering(NodeScores),
	/// Graph statistics.
	Stats(StatsResult),
}

impl AlgorithmResult {
	/// The algorithm this result belongs to.
	pub fn kind(&self) -> AlgorithmKind {
		match self {
			Self::Path(_) => AlgorithmKind::ShortestPath,
			Self::Centrality(_) => AlgorithmKind::DegreeCentrality,
			Self::Clustering(_) => AlgorithmKind::Clustering,
			Self::Stats(_) => AlgorithmKind::Stats,
		}
	}
}

/// Formats a score the way result tables show it.
pub fn format_score(value: f64) -> String {
	format!("{value:.4}")
}

/// Joins a path for display, e.g. `A → B → C`.
pub fn format_path(path: &[NodeId]) -> String {
	path.join(" → ")
}

impl Graph {
	/// Node count, edge count, density and (undirected only) average
	/// clustering.
	pub fn stats(&self) -> StatsResult {
		StatsResult {
			node_count: self.node_count(),
			edge_count: self.edge_count(),
			density: self.density(),
			avg_clustering: (!self.is_directed()).then(|| self.average_clustering()),
		}
	}

	/// Ratio of edges to the maximum possible for this node count; `0` below
	/// two nodes.
	pub fn density(&self) -> f64 {
		let n = self.node_count() as f64;
		if n < 2.0 {
			return 0.0;
		}
		let possible = if self.is_directed() {
			n * (n - 1.0)
		} else {
			n * (n - 1.0) / 2.0
		};
		self.edge_count() as f64 / possible
	}

	/// Mean of the local clustering coefficients, `0` for an empty graph.
	/// Directed graphs report `0`; use [`Graph::stats`] to tell the cases
	/// apart.
	pub fn average_clustering(&self) -> f64 {
		let n = self.node_count();
		if n == 0 || self.is_directed() {
			return 0.0;
		}
		(0..n).map(|idx| self.local_clustering(idx)).sum::<f64>() / n as f64
	}

	/// One shortest path from `start` to `end` found by breadth-first search.
	pub fn shortest_path(&self, start: &str, end: &str) -> Result<Vec<NodeId>, GraphError> {
		let src = self
			.index_of(start)
			.ok_or_else(|| GraphError::NodeNotFound(start.to_owned()))?;
		let dst = self
			.index_of(end)
			.ok_or_else(|| GraphError::NodeNotFound(end.to_owned()))?;

		let mut parent: Vec<Option<usize>> = vec![None; self.node_count()];
		let mut seen = vec![false; self.node_count()];
		let mut queue = VecDeque::from([src]);
		seen[src] = true;

		while let Some(current) = queue.pop_front() {
			if current == dst {
				let mut path = vec![self.id(dst).clone()];
				let mut cursor = dst;
				while let Some(prev) = parent[cursor] {
					path.push(self.id(prev).clone());
					cursor = prev;
				}
				path.reverse();
				return Ok(path);
			}
			for &next in self.successors(current) {
				if !seen[next] {
					seen[next] = true;
					parent[next] = Some(current);
					queue.push_back(next);
				}
			}
		}

		Err(GraphError::NoPath {
			from: start.to_owned(),
			to: end.to_owned(),
		})
	}

	/// Distinct neighbours of each node over `n - 1`. For directed graphs
	/// in- and out-neighbours are merged, so scores stay within `[0, 1]`.
	pub fn degree_centrality(&self) -> NodeScores {
		let n = self.node_count();
		(0..n)
			.map(|idx| {
				let degree = self.neighbor_indices(idx).len() as f64;
				let score = if n > 1 { degree / (n - 1) as f64 } else { 0.0 };
				(self.id(idx).clone(), score)
			})
			.collect()
	}

	/// Local clustering coefficient of every node. Fails for directed graphs.
	pub fn clustering_coefficient(&self) -> Result<NodeScores, GraphError> {
		if self.is_directed() {
			return Err(GraphError::UnsupportedOperation("Clustering"));
		}
		Ok((0..self.node_count())
			.map(|idx| (self.id(idx).clone(), self.local_clustering(idx)))
			.collect())
	}

	fn local_clustering(&self, idx: usize) -> f64 {
		let neighbors: Vec<usize> = self.neighbor_indices(idx).into_iter().collect();
		let k = neighbors.len();
		if k < 2 {
			return 0.0;
		}
		let mut links = 0usize;
		for (i, &a) in neighbors.iter().enumerate() {
			for &b in &neighbors[i + 1..] {
				if self.has_edge_between(a, b) {
					links += 1;
				}
			}
		}
		2.0 * links as f64 / (k * (k - 1)) as f64
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::graph::parse;

	fn path_graph() -> Graph {
		parse("A, B, C", "A, B\nB, C", false).unwrap()
	}

	#[test]
	fn stats_of_a_path() {
		let stats = path_graph().stats();
		assert_eq!(stats.node_count, 3);
		assert_eq!(stats.edge_count, 2);
		assert!((stats.density - 2.0 / 3.0).abs() < 1e-12);
		assert_eq!(stats.avg_clustering, Some(0.0));
	}

	#[test]
	fn stats_entries_are_formatted() {
		let entries = path_graph().stats().entries();
		assert_eq!(entries[2], ("Density", "0.6667".to_owned()));
		let directed = parse("A, B", "A, B", true).unwrap().stats().entries();
		assert_eq!(directed[3], ("Avg. Clustering", "N/A".to_owned()));
		assert_eq!(directed[2], ("Density", "0.5000".to_owned()));
	}

	#[test]
	fn single_node_has_zero_density_and_centrality() {
		let g = parse("A", "A, A", false).unwrap();
		assert_eq!(g.density(), 0.0);
		assert_eq!(g.degree_centrality().get("A"), Some(&0.0));
	}

	#[test]
	fn path_to_self_is_a_single_node() {
		assert_eq!(path_graph().shortest_path("B", "B"), Ok(vec!["B".to_owned()]));
	}

	#[test]
	fn path_through_middle_node() {
		assert_eq!(
			path_graph().shortest_path("A", "C").unwrap(),
			["A", "B", "C"]
		);
	}

	#[test]
	fn bfs_prefers_fewer_hops() {
		let g = parse("A, B, C, D, E", "A, B\nB, C\nC, D\nD, E\nA, E", false).unwrap();
		assert_eq!(g.shortest_path("A", "D").unwrap().len(), 3);
	}

	#[test]
	fn missing_endpoint_is_reported() {
		assert_eq!(
			path_graph().shortest_path("A", "Z"),
			Err(GraphError::NodeNotFound("Z".to_owned()))
		);
	}

	#[test]
	fn disconnected_components_have_no_path() {
		let g = parse("A, B, C, D", "A, B\nC, D", false).unwrap();
		assert!(matches!(
			g.shortest_path("A", "D"),
			Err(GraphError::NoPath { .. })
		));
	}

	#[test]
	fn centrality_of_a_star() {
		let g = parse("hub", "hub, a\nhub, b\nhub, c", false).unwrap();
		let c = g.degree_centrality();
		assert_eq!(c.get("hub"), Some(&1.0));
		assert!((c.get("a").copied().unwrap() - 1.0 / 3.0).abs() < 1e-12);
	}

	#[test]
	fn directed_centrality_merges_both_directions() {
		let g = parse("A, B", "A, B\nB, A", true).unwrap();
		assert_eq!(g.degree_centrality().get("A"), Some(&1.0));
	}

	#[test]
	fn triangle_with_tail_clustering() {
		let g = parse("A, B, C, D", "A, B\nB, C\nC, A\nC, D", false).unwrap();
		let c = g.clustering_coefficient().unwrap();
		assert_eq!(c.get("A"), Some(&1.0));
		assert!((c.get("C").copied().unwrap() - 1.0 / 3.0).abs() < 1e-12);
		assert_eq!(c.get("D"), Some(&0.0));
		let expected_avg = (1.0 + 1.0 + 1.0 / 3.0 + 0.0) / 4.0;
		assert!((g.average_clustering() - expected_avg).abs() < 1e-12);
	}

	#[test]
	fn clustering_rejects_directed_graphs() {
		let g = parse("A, B, C", "A, B\nB, C\nC, A", true).unwrap();
		assert_eq!(
			g.clustering_coefficient(),
			Err(GraphError::UnsupportedOperation("Clustering"))
		);
		assert_eq!(g.stats().avg_clustering, None);
	}

	#[test]
	fn result_kinds_and_formatting() {
		let path = vec!["A".to_owned(), "B".to_owned()];
		assert_eq!(format_path(&path), "A → B");
		assert_eq!(
			AlgorithmResult::Path(path).kind(),
			AlgorithmKind::ShortestPath
		);
		assert_eq!(AlgorithmKind::Clustering.title(), "Clustering Coefficient");
	}
}
