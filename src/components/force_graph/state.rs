use std::collections::HashSet;

use crate::graph::{NodeId, SceneDescription};

pub const NODE_RADIUS: f64 = 8.0;
pub const HIT_RADIUS: f64 = 14.0;
/// Share of the shorter canvas side covered by the `[-1, 1]` layout box.
const FIT: f64 = 0.4;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
	delay_t: f64,
}

/// Canvas-side view of a scene: marker positions in world units plus the
/// interaction state.
pub struct CanvasState {
	pub scene: SceneDescription,
	pub points: Vec<(f64, f64)>,
	pub path_nodes: HashSet<usize>,
	path_links: HashSet<(usize, usize)>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

impl CanvasState {
	pub fn new(scene: SceneDescription, path: &[NodeId], width: f64, height: f64) -> Self {
		let mut state = Self {
			scene: SceneDescription::default(),
			points: Vec::new(),
			path_nodes: HashSet::new(),
			path_links: HashSet::new(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
		};
		state.set_scene(scene);
		state.set_path(path);
		state
	}

	/// Swaps in a new scene, dropping hover state that referred to the old one.
	pub fn set_scene(&mut self, scene: SceneDescription) {
		self.scene = scene;
		self.project();
		self.hover = HoverState::default();
		self.path_nodes.clear();
		self.path_links.clear();
	}

	pub fn set_path(&mut self, path: &[NodeId]) {
		let indices: Vec<usize> = path
			.iter()
			.filter_map(|id| self.scene.nodes.iter().position(|m| &m.id == id))
			.collect();
		self.path_nodes = indices.iter().copied().collect();
		self.path_links = indices.windows(2).map(|w| (w[0], w[1])).collect();
	}

	pub fn is_path_link(&self, src: usize, tgt: usize) -> bool {
		self.path_links.contains(&(src, tgt))
			|| (!self.scene.directed && self.path_links.contains(&(tgt, src)))
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		// HIT_RADIUS is in world-space, scales with zoom like nodes
		self.points
			.iter()
			.rposition(|&(x, y)| ((x - gx).powi(2) + (y - gy).powi(2)).sqrt() < HIT_RADIUS)
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.scene.links {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// Advances the path flow animation and the hover fade.
	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	/// Resizes the viewport, rescaling world positions and keeping the
	/// scene centred.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.transform.x = width / 2.0;
		self.transform.y = height / 2.0;
		self.project();
	}

	fn project(&mut self) {
		let scale = self.width.min(self.height) * FIT;
		self.points = self
			.scene
			.nodes
			.iter()
			.map(|m| (m.position.x * scale, m.position.y * scale))
			.collect();
	}
}
