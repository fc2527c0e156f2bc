use std::collections::HashSet;

use graph_explorer::graph::{GraphError, parse};
use proptest::prelude::*;

fn ident() -> impl Strategy<Value = String> {
	"[A-F]{1,2}"
}

fn edge_lines() -> impl Strategy<Value = Vec<Vec<String>>> {
	prop::collection::vec(prop::collection::vec(ident(), 0..4), 1..12)
}

fn join_lines(lines: &[Vec<String>]) -> String {
	lines
		.iter()
		.map(|tokens| tokens.join(", "))
		.collect::<Vec<_>>()
		.join("\n")
}

proptest! {
	#[test]
	fn nodes_are_unique_and_first_seen(tokens in prop::collection::vec(ident(), 1..20)) {
		let g = parse(&tokens.join(" , "), "x, y", false).unwrap();
		let mut seen = HashSet::new();
		let expected: Vec<String> = tokens
			.iter()
			.filter(|t| seen.insert(t.as_str()))
			.cloned()
			.collect();
		prop_assert_eq!(&g.nodes()[..expected.len()], expected.as_slice());
		let unique: HashSet<_> = g.nodes().iter().collect();
		prop_assert_eq!(unique.len(), g.node_count());
	}

	#[test]
	fn only_two_token_lines_make_edges(lines in edge_lines(), directed in any::<bool>()) {
		let edges_text = join_lines(&lines);
		prop_assume!(!edges_text.trim().is_empty());
		let g = parse("A", &edges_text, directed).unwrap();
		let pairs = lines.iter().filter(|l| l.len() == 2).count();
		prop_assert!(g.edge_count() <= pairs);
	}

	#[test]
	fn centrality_stays_in_unit_interval(lines in edge_lines(), directed in any::<bool>()) {
		let edges_text = join_lines(&lines);
		prop_assume!(!edges_text.trim().is_empty());
		let g = parse("A, B", &edges_text, directed).unwrap();
		for &v in g.degree_centrality().values() {
			prop_assert!((0.0..=1.0).contains(&v));
		}
		prop_assert!((0.0..=1.0).contains(&g.density()));
	}

	#[test]
	fn bipartite_graphs_have_zero_clustering(
		pairs in prop::collection::vec(("[a-d]", "[w-z]"), 1..16),
	) {
		// every edge joins the two alphabets, so no triangle can form
		let edges_text = pairs
			.iter()
			.map(|(l, r)| format!("{l}, {r}"))
			.collect::<Vec<_>>()
			.join("\n");
		let g = parse("a", &edges_text, false).unwrap();
		let clustering = g.clustering_coefficient().unwrap();
		prop_assert!(clustering.values().all(|&c| c == 0.0));
	}

	#[test]
	fn path_to_self_and_directed_clustering(lines in edge_lines()) {
		let edges_text = join_lines(&lines);
		prop_assume!(!edges_text.trim().is_empty());
		let g = parse("A", &edges_text, true).unwrap();
		prop_assert_eq!(g.shortest_path("A", "A").unwrap(), vec!["A".to_owned()]);
		prop_assert_eq!(
			g.clustering_coefficient(),
			Err(GraphError::UnsupportedOperation("Clustering"))
		);
	}

	#[test]
	fn found_paths_follow_edges(lines in edge_lines(), directed in any::<bool>()) {
		let edges_text = join_lines(&lines);
		prop_assume!(!edges_text.trim().is_empty());
		let g = parse("A, B", &edges_text, directed).unwrap();
		if let Ok(path) = g.shortest_path("A", "B") {
			prop_assert_eq!(path.first().map(String::as_str), Some("A"));
			prop_assert_eq!(path.last().map(String::as_str), Some("B"));
			let edges: HashSet<(&str, &str)> = g.edges().collect();
			for w in path.windows(2) {
				let (a, b) = (w[0].as_str(), w[1].as_str());
				prop_assert!(edges.contains(&(a, b)) || (!directed && edges.contains(&(b, a))));
			}
		}
	}
}
