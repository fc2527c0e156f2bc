use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::error::GraphError;
use super::model::{Graph, NodeMap};

/// Seed used across the app so the same graph always looks the same.
pub const DEFAULT_SEED: u64 = 42;

/// A 2D coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Position of every node, normalised into `[-1, 1]` on both axes.
pub type LayoutPositions = NodeMap<Point>;

/// Parameters of the spring simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Seed for the initial placement.
	pub seed: u64,
	/// Simulation steps to run.
	pub iterations: usize,
	/// Time advanced per step.
	pub time_step: f32,
	/// Half-width of the square nodes start in.
	pub spread: f32,
	/// Mass of every node.
	pub node_mass: f32,
	/// Repulsion between every pair of nodes.
	pub force_charge: f32,
	/// Attraction along edges.
	pub force_spring: f32,
	/// Cap on the force applied to a node per step.
	pub force_max: f32,
	/// Cap on node velocity.
	pub node_speed: f32,
	/// Velocity retained between steps.
	pub damping_factor: f32,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			seed: DEFAULT_SEED,
			iterations: 300,
			time_step: 0.016,
			spread: 100.0,
			node_mass: 10.0,
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		}
	}
}

/// Spring layout of `graph` with the default simulation parameters.
pub fn layout(graph: &Graph, seed: u64) -> Result<LayoutPositions, GraphError> {
	LayoutConfig {
		seed,
		..LayoutConfig::default()
	}
	.run(graph)
}

impl LayoutConfig {
	fn simulation_parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}

	/// Places nodes at seeded random positions, runs the simulation for a
	/// fixed number of steps and rescales the result.
	pub fn run(&self, graph: &Graph) -> Result<LayoutPositions, GraphError> {
		let mut rng = StdRng::seed_from_u64(self.seed);
		let mut sim: ForceGraph<usize, ()> = ForceGraph::new(self.simulation_parameters());

		let handles: Vec<_> = (0..graph.node_count())
			.map(|idx| {
				let x = rng.random_range(-self.spread..=self.spread);
				let y = rng.random_range(-self.spread..=self.spread);
				sim.add_node(NodeData {
					x,
					y,
					mass: self.node_mass,
					is_anchor: false,
					user_data: idx,
				})
			})
			.collect();

		for &(src, tgt) in graph.edge_indices() {
			sim.add_edge(handles[src], handles[tgt], EdgeData::default());
		}

		for _ in 0..self.iterations {
			sim.update(self.time_step);
		}

		let mut raw = vec![Point::default(); graph.node_count()];
		sim.visit_nodes(|node| {
			raw[node.data.user_data] = Point::new(node.x() as f64, node.y() as f64);
		});

		if let Some(idx) = raw.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
			return Err(GraphError::LayoutDiverged(graph.id(idx).clone()));
		}

		Ok(rescale(&raw)
			.into_iter()
			.enumerate()
			.map(|(idx, p)| (graph.id(idx).clone(), p))
			.collect())
	}
}

/// Centres points on their mean and scales the largest coordinate to 1.
fn rescale(points: &[Point]) -> Vec<Point> {
	if points.is_empty() {
		return Vec::new();
	}
	let n = points.len() as f64;
	let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
	let cy = points.iter().map(|p| p.y).sum::<f64>() / n;
	let centred: Vec<Point> = points.iter().map(|p| Point::new(p.x - cx, p.y - cy)).collect();
	let lim = centred
		.iter()
		.map(|p| p.x.abs().max(p.y.abs()))
		.fold(0.0, f64::max);
	if lim == 0.0 {
		return centred;
	}
	centred
		.into_iter()
		.map(|p| Point::new(p.x / lim, p.y / lim))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::parse;

	#[test]
	fn same_seed_gives_identical_positions() {
		let g = parse("A, B, C, D", "A, B\nB, C\nC, D\nD, A", false).unwrap();
		assert_eq!(layout(&g, DEFAULT_SEED), layout(&g, DEFAULT_SEED));
	}

	#[test]
	fn positions_cover_every_node_within_unit_box() {
		let g = parse("A, B", "A, C\nC, D", true).unwrap();
		let pos = layout(&g, 7).unwrap();
		assert_eq!(pos.len(), 4);
		for p in pos.values() {
			assert!(p.x.abs() <= 1.0 + 1e-9 && p.y.abs() <= 1.0 + 1e-9);
		}
	}

	#[test]
	fn lone_node_sits_at_origin() {
		let g = parse("A", "A, A", false).unwrap();
		let pos = layout(&g, DEFAULT_SEED).unwrap();
		assert_eq!(pos.get("A"), Some(&Point::new(0.0, 0.0)));
	}

	#[test]
	fn empty_graph_has_no_positions() {
		let g = parse(",", ",", false).unwrap();
		assert!(layout(&g, DEFAULT_SEED).unwrap().is_empty());
	}

	#[test]
	fn rescale_keeps_aspect() {
		let out = rescale(&[Point::new(0.0, 0.0), Point::new(4.0, 2.0)]);
		assert_eq!(out, [Point::new(-1.0, -0.5), Point::new(1.0, 0.5)]);
	}
}
