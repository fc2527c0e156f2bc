use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Serialize, Serializer};

/// Identifier of a node as typed by the user.
pub type NodeId = String;

/// A simple graph (no parallel edges, no self-loops) over string ids.
///
/// Nodes keep their first-seen order, which only matters for display. The
/// structure is built by [`parse`](super::parse) and is read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
	directed: bool,
	nodes: Vec<NodeId>,
	index: HashMap<NodeId, usize>,
	edges: Vec<(usize, usize)>,
	edge_set: HashSet<(usize, usize)>,
	successors: Vec<BTreeSet<usize>>,
	predecessors: Vec<BTreeSet<usize>>,
}

impl Graph {
	pub(crate) fn new(directed: bool) -> Self {
		Self {
			directed,
			nodes: Vec::new(),
			index: HashMap::new(),
			edges: Vec::new(),
			edge_set: HashSet::new(),
			successors: Vec::new(),
			predecessors: Vec::new(),
		}
	}

	/// Inserts `id` unless present and returns its index.
	pub(crate) fn add_node(&mut self, id: &str) -> usize {
		if let Some(&idx) = self.index.get(id) {
			return idx;
		}
		let idx = self.nodes.len();
		self.nodes.push(id.to_owned());
		self.index.insert(id.to_owned(), idx);
		self.successors.push(BTreeSet::new());
		self.predecessors.push(BTreeSet::new());
		idx
	}

	/// Inserts an edge, adding missing endpoints. Returns `false` for
	/// self-loops and for edges already present under the graph's identity
	/// rule.
	pub(crate) fn add_edge(&mut self, source: &str, target: &str) -> bool {
		if source == target {
			return false;
		}
		let (src, tgt) = (self.add_node(source), self.add_node(target));
		let key = if self.directed {
			(src, tgt)
		} else {
			(src.min(tgt), src.max(tgt))
		};
		if !self.edge_set.insert(key) {
			return false;
		}
		self.edges.push((src, tgt));
		self.successors[src].insert(tgt);
		self.predecessors[tgt].insert(src);
		if !self.directed {
			self.successors[tgt].insert(src);
			self.predecessors[src].insert(tgt);
		}
		true
	}

	/// Whether edges are one-way.
	pub fn is_directed(&self) -> bool {
		self.directed
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of distinct edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Node ids in first-seen order.
	pub fn nodes(&self) -> &[NodeId] {
		&self.nodes
	}

	/// Whether `id` is a node of this graph.
	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	/// Edges in insertion order, as written by the user.
	pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.edges
			.iter()
			.map(|&(s, t)| (self.nodes[s].as_str(), self.nodes[t].as_str()))
	}

	/// Ids adjacent to `id` regardless of direction, or `None` if unknown.
	pub fn neighbors(&self, id: &str) -> Option<Vec<&str>> {
		let idx = self.index_of(id)?;
		Some(
			self.neighbor_indices(idx)
				.into_iter()
				.map(|n| self.nodes[n].as_str())
				.collect(),
		)
	}

	pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	pub(crate) fn id(&self, idx: usize) -> &NodeId {
		&self.nodes[idx]
	}

	pub(crate) fn edge_indices(&self) -> &[(usize, usize)] {
		&self.edges
	}

	/// Nodes reachable over one edge, following direction.
	pub(crate) fn successors(&self, idx: usize) -> &BTreeSet<usize> {
		&self.successors[idx]
	}

	/// Nodes adjacent over one edge in either direction.
	pub(crate) fn neighbor_indices(&self, idx: usize) -> BTreeSet<usize> {
		self.successors[idx]
			.union(&self.predecessors[idx])
			.copied()
			.collect()
	}

	pub(crate) fn has_edge_between(&self, a: usize, b: usize) -> bool {
		self.successors[a].contains(&b) || self.successors[b].contains(&a)
	}
}

/// Per-node values in node order, such as scores or positions.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeMap<V> {
	entries: Vec<(NodeId, V)>,
}

impl<V> NodeMap<V> {
	/// Value for `id`, if the node has one.
	pub fn get(&self, id: &str) -> Option<&V> {
		self.entries.iter().find(|(k, _)| k == id).map(|(_, v)| v)
	}

	/// Entries in node order.
	pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &V)> {
		self.entries.iter().map(|(k, v)| (k, v))
	}

	/// Values in node order.
	pub fn values(&self) -> impl Iterator<Item = &V> {
		self.entries.iter().map(|(_, v)| v)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<V> Default for NodeMap<V> {
	fn default() -> Self {
		Self {
			entries: Vec::new(),
		}
	}
}

impl<V> FromIterator<(NodeId, V)> for NodeMap<V> {
	fn from_iter<I: IntoIterator<Item = (NodeId, V)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}

impl<V: Serialize> Serialize for NodeMap<V> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
	}
}

/// Node-to-score mapping produced by centrality and clustering.
pub type NodeScores = NodeMap<f64>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn undirected_edges_collapse_both_orientations() {
		let mut g = Graph::new(false);
		assert!(g.add_edge("A", "B"));
		assert!(!g.add_edge("B", "A"));
		assert_eq!(g.edge_count(), 1);
		assert_eq!(g.neighbors("B"), Some(vec!["A"]));
	}

	#[test]
	fn directed_edges_keep_orientation() {
		let mut g = Graph::new(true);
		assert!(g.add_edge("A", "B"));
		assert!(g.add_edge("B", "A"));
		assert!(!g.add_edge("A", "B"));
		assert_eq!(g.edge_count(), 2);
	}

	#[test]
	fn self_loops_are_rejected() {
		let mut g = Graph::new(false);
		assert!(!g.add_edge("A", "A"));
		assert_eq!(g.node_count(), 0);
	}

	#[test]
	fn node_map_lookup_follows_insertion_order() {
		let map: NodeScores = [("b".to_owned(), 1.0), ("a".to_owned(), 0.5)]
			.into_iter()
			.collect();
		assert_eq!(map.get("a"), Some(&0.5));
		assert_eq!(map.iter().next().map(|(k, _)| k.as_str()), Some("b"));
		assert!(map.get("c").is_none());
	}
}
