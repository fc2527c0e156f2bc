use log::debug;

use super::error::GraphError;
use super::model::Graph;

/// Builds a graph from the two free-text form fields.
///
/// `nodes_text` is a comma-separated list; `edges_text` holds one
/// `source, target` pair per line. Edge lines that do not contain exactly two
/// non-empty tokens are skipped without error. Endpoints missing from the
/// node list are appended to it. A self-loop line adds its node but no edge.
pub fn parse(nodes_text: &str, edges_text: &str, directed: bool) -> Result<Graph, GraphError> {
	if nodes_text.trim().is_empty() || edges_text.trim().is_empty() {
		return Err(GraphError::EmptyInput);
	}

	let mut graph = Graph::new(directed);
	for token in tokens(nodes_text) {
		graph.add_node(token);
	}

	for (line_no, line) in edges_text.lines().enumerate() {
		let parts: Vec<&str> = tokens(line).collect();
		match parts.as_slice() {
			[] => {}
			[source, target] if source == target => {
				graph.add_node(source);
				debug!("dropping self-loop edge on line {}: {:?}", line_no + 1, line);
			}
			[source, target] => {
				graph.add_edge(source, target);
			}
			_ => {
				debug!(
					"skipping edge line {} with {} tokens: {:?}",
					line_no + 1,
					parts.len(),
					line
				);
			}
		}
	}

	Ok(graph)
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
	text.split(',').map(str::trim).filter(|t| !t.is_empty())
}
