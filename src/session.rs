//! Per-tab state: form draft, the submitted graph with its layout, and the
//! last result of each algorithm.
//!
//! Every submission rebuilds everything from text and drops old results.
//! Algorithm calls re-parse the submitted text instead of trusting the cached
//! graph, so results always match what was submitted.

use std::collections::BTreeMap;
use std::fmt;

use log::{error, info, warn};

use crate::graph::{
	AlgorithmKind, AlgorithmResult, Graph, GraphError, GraphInput, LayoutConfig, LayoutPositions,
	NodeId, NodeScores, Preset, SceneDescription, StatsResult, parse, to_scene,
};

/// Severity of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
	/// Neutral information.
	Info,
	/// An action completed.
	Success,
	/// The action was refused; nothing changed.
	Warning,
	/// The action failed.
	Error,
}

/// A short message for the user about the last action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
	/// How the message should be styled.
	pub level: NoticeLevel,
	/// Text shown to the user.
	pub message: String,
}

impl Notice {
	fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
		Self {
			level,
			message: message.into(),
		}
	}

	/// Confirms a preset was copied into the form.
	pub fn preset_loaded(preset: Preset) -> Self {
		Self::new(NoticeLevel::Info, format!("Loaded '{}' preset.", preset.label()))
	}

	/// Confirms an algorithm finished.
	pub fn calculated(kind: AlgorithmKind) -> Self {
		Self::new(NoticeLevel::Success, format!("Calculated {}.", kind.title()))
	}
}

impl From<&GraphError> for Notice {
	fn from(err: &GraphError) -> Self {
		match err {
			GraphError::NodeNotFound(_) | GraphError::NoPath { .. } => {
				Self::new(NoticeLevel::Error, "No path found between the selected nodes.")
			}
			GraphError::UnsupportedOperation(_) => {
				Self::new(NoticeLevel::Warning, format!("{err}."))
			}
			GraphError::MissingEndpoints | GraphError::NoGraph => {
				Self::new(NoticeLevel::Warning, err.to_string())
			}
			GraphError::LayoutDiverged(_) => {
				Self::new(NoticeLevel::Error, "Failed to lay out the graph.")
			}
			GraphError::EmptyInput | GraphError::UnknownPreset(_) => {
				Self::new(NoticeLevel::Error, err.to_string())
			}
		}
	}
}

/// What changed in a [`SessionState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
	/// The form draft was replaced.
	DraftChanged,
	/// A preset was copied into the draft.
	PresetLoaded(Preset),
	/// A new graph replaced the previous one; all results were cleared.
	GraphSubmitted,
	/// A result was stored.
	ResultUpdated(AlgorithmKind),
	/// A result was dropped after a failed run.
	ResultCleared(AlgorithmKind),
}

type Observer = Box<dyn Fn(&SessionEvent) + Send + Sync>;

/// State of one user session.
pub struct SessionState {
	config: LayoutConfig,
	draft: GraphInput,
	submitted: Option<GraphInput>,
	graph: Option<Graph>,
	positions: Option<LayoutPositions>,
	scene: Option<SceneDescription>,
	results: BTreeMap<AlgorithmKind, AlgorithmResult>,
	observer: Option<Observer>,
}

impl fmt::Debug for SessionState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SessionState")
			.field("config", &self.config)
			.field("draft", &self.draft)
			.field("submitted", &self.submitted)
			.field("graph", &self.graph)
			.field("results", &self.results)
			.field("observer", &self.observer.is_some())
			.finish_non_exhaustive()
	}
}

impl Default for SessionState {
	fn default() -> Self {
		Self::new(LayoutConfig::default())
	}
}

impl SessionState {
	/// Empty session laying graphs out with `config`.
	pub fn new(config: LayoutConfig) -> Self {
		Self {
			config,
			draft: GraphInput::default(),
			submitted: None,
			graph: None,
			positions: None,
			scene: None,
			results: BTreeMap::new(),
			observer: None,
		}
	}

	/// Registers a callback run after every mutation.
	pub fn with_observer(mut self, observer: impl Fn(&SessionEvent) + Send + Sync + 'static) -> Self {
		self.observer = Some(Box::new(observer));
		self
	}

	fn notify(&self, event: SessionEvent) {
		if let Some(observer) = &self.observer {
			observer(&event);
		}
	}

	/// Current form contents.
	pub fn draft(&self) -> &GraphInput {
		&self.draft
	}

	/// Replaces the form contents without building anything.
	pub fn set_draft(&mut self, draft: GraphInput) {
		self.draft = draft;
		self.notify(SessionEvent::DraftChanged);
	}

	/// Copies the named preset into the draft, keeping the chosen direction.
	pub fn load_preset(&mut self, name: &str) -> Result<Preset, GraphError> {
		let preset: Preset = name.parse()?;
		self.draft = preset.input(self.draft.directed);
		self.notify(SessionEvent::PresetLoaded(preset));
		Ok(preset)
	}

	/// Builds graph, layout and scene from `input` and makes them current.
	///
	/// On failure nothing changes. On success every previous result is
	/// dropped and fresh statistics are stored.
	pub fn submit(&mut self, input: GraphInput) -> Result<(), GraphError> {
		let input = GraphInput::new(input.nodes_text.trim(), input.edges_text.trim(), input.directed);
		let graph = parse(&input.nodes_text, &input.edges_text, input.directed)?;
		let positions = self.config.run(&graph).inspect_err(|err| {
			error!("layout failed: {err}");
		})?;
		let scene = to_scene(&graph, &positions);

		info!(
			"graph submitted: {} nodes, {} edges, directed={}",
			graph.node_count(),
			graph.edge_count(),
			graph.is_directed()
		);

		self.results.clear();
		self.results
			.insert(AlgorithmKind::Stats, AlgorithmResult::Stats(graph.stats()));
		self.draft = input.clone();
		self.submitted = Some(input);
		self.graph = Some(graph);
		self.positions = Some(positions);
		self.scene = Some(scene);
		self.notify(SessionEvent::GraphSubmitted);
		Ok(())
	}

	/// Input of the last successful submission.
	pub fn submitted(&self) -> Option<&GraphInput> {
		self.submitted.as_ref()
	}

	/// Graph of the last successful submission.
	pub fn graph(&self) -> Option<&Graph> {
		self.graph.as_ref()
	}

	/// Layout of the current graph.
	pub fn positions(&self) -> Option<&LayoutPositions> {
		self.positions.as_ref()
	}

	/// Drawable scene of the current graph.
	pub fn scene(&self) -> Option<&SceneDescription> {
		self.scene.as_ref()
	}

	/// Node ids of the current graph, for endpoint pickers.
	pub fn node_ids(&self) -> &[NodeId] {
		self.graph.as_ref().map(Graph::nodes).unwrap_or_default()
	}

	/// Last stored result of `kind`.
	pub fn result(&self, kind: AlgorithmKind) -> Option<&AlgorithmResult> {
		self.results.get(&kind)
	}

	/// Statistics of the current graph.
	pub fn stats(&self) -> Option<&StatsResult> {
		match self.result(AlgorithmKind::Stats)? {
			AlgorithmResult::Stats(stats) => Some(stats),
			_ => None,
		}
	}

	/// Last shortest path found.
	pub fn path(&self) -> Option<&[NodeId]> {
		match self.result(AlgorithmKind::ShortestPath)? {
			AlgorithmResult::Path(path) => Some(path),
			_ => None,
		}
	}

	/// Last degree centrality computed.
	pub fn centrality(&self) -> Option<&NodeScores> {
		match self.result(AlgorithmKind::DegreeCentrality)? {
			AlgorithmResult::Centrality(scores) => Some(scores),
			_ => None,
		}
	}

	/// Last clustering coefficients computed.
	pub fn clustering(&self) -> Option<&NodeScores> {
		match self.result(AlgorithmKind::Clustering)? {
			AlgorithmResult::Clustering(scores) => Some(scores),
			_ => None,
		}
	}

	fn rebuild(&self) -> Result<Graph, GraphError> {
		let input = self.submitted.as_ref().ok_or(GraphError::NoGraph)?;
		parse(&input.nodes_text, &input.edges_text, input.directed)
	}

	fn store(&mut self, result: AlgorithmResult) {
		let kind = result.kind();
		self.results.insert(kind, result);
		self.notify(SessionEvent::ResultUpdated(kind));
	}

	/// Finds a shortest path between the two selected nodes.
	///
	/// Empty selections are refused without touching the previous path; an
	/// unknown or unreachable endpoint clears it.
	pub fn shortest_path(&mut self, start: &str, end: &str) -> Result<Vec<NodeId>, GraphError> {
		if start.is_empty() || end.is_empty() {
			return Err(GraphError::MissingEndpoints);
		}
		let graph = self.rebuild()?;
		match graph.shortest_path(start, end) {
			Ok(path) => {
				self.store(AlgorithmResult::Path(path.clone()));
				Ok(path)
			}
			Err(err) => {
				warn!("shortest path not found: {err}");
				if self.results.remove(&AlgorithmKind::ShortestPath).is_some() {
					self.notify(SessionEvent::ResultCleared(AlgorithmKind::ShortestPath));
				}
				Err(err)
			}
		}
	}

	/// Computes degree centrality of the submitted graph.
	pub fn degree_centrality(&mut self) -> Result<NodeScores, GraphError> {
		let scores = self.rebuild()?.degree_centrality();
		self.store(AlgorithmResult::Centrality(scores.clone()));
		Ok(scores)
	}

	/// Computes clustering coefficients; refused for directed graphs with the
	/// previous result left in place.
	pub fn clustering_coefficient(&mut self) -> Result<NodeScores, GraphError> {
		let scores = self.rebuild()?.clustering_coefficient().inspect_err(|err| {
			warn!("clustering refused: {err}");
		})?;
		self.store(AlgorithmResult::Clustering(scores.clone()));
		Ok(scores)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{Arc, Mutex};

	use pretty_assertions::assert_eq;

	use super::*;

	fn submitted(nodes: &str, edges: &str, directed: bool) -> SessionState {
		let mut session = SessionState::default();
		session
			.submit(GraphInput::new(nodes, edges, directed))
			.unwrap();
		session
	}

	#[test]
	fn empty_submission_leaves_state_untouched() {
		let mut session = submitted("A, B", "A, B", false);
		let before = session.scene().cloned();
		assert_eq!(
			session.submit(GraphInput::new("", "A, B", false)),
			Err(GraphError::EmptyInput)
		);
		assert_eq!(session.scene().cloned(), before);
		assert_eq!(session.submitted().map(|i| i.nodes_text.as_str()), Some("A, B"));
	}

	#[test]
	fn submission_clears_previous_results() {
		let mut session = submitted("A, B, C", "A, B\nB, C", false);
		session.degree_centrality().unwrap();
		session.shortest_path("A", "C").unwrap();
		session.submit(GraphInput::new("X, Y", "X, Y", false)).unwrap();
		assert!(session.centrality().is_none());
		assert!(session.path().is_none());
		assert_eq!(session.stats().map(|s| s.node_count), Some(2));
	}

	#[test]
	fn algorithms_need_a_submission() {
		let mut session = SessionState::default();
		assert_eq!(session.degree_centrality(), Err(GraphError::NoGraph));
		assert!(session.node_ids().is_empty());
	}

	#[test]
	fn failed_path_clears_the_previous_one() {
		let mut session = submitted("A, B, C", "A, B", false);
		session.shortest_path("A", "B").unwrap();
		assert!(matches!(
			session.shortest_path("A", "C"),
			Err(GraphError::NoPath { .. })
		));
		assert!(session.path().is_none());
	}

	#[test]
	fn missing_selection_keeps_the_previous_path() {
		let mut session = submitted("A, B", "A, B", false);
		session.shortest_path("A", "B").unwrap();
		assert_eq!(session.shortest_path("", "B"), Err(GraphError::MissingEndpoints));
		assert_eq!(session.path().map(<[NodeId]>::len), Some(2));
	}

	#[test]
	fn directed_clustering_keeps_state() {
		let mut session = submitted("A, B", "A, B", true);
		let err = session.clustering_coefficient().unwrap_err();
		assert_eq!(err, GraphError::UnsupportedOperation("Clustering"));
		assert!(session.clustering().is_none());
		assert_eq!(Notice::from(&err).level, NoticeLevel::Warning);
	}

	#[test]
	fn preset_loads_into_draft_only() {
		let mut session = submitted("A, B", "A, B", true);
		assert_eq!(session.load_preset("cycle"), Ok(Preset::Cycle));
		assert_eq!(session.draft().nodes_text, "1, 2, 3, 4, 5");
		assert!(session.draft().directed);
		assert_eq!(session.degree_centrality().unwrap().len(), 2);
		assert!(session.load_preset("nope").is_err());
	}

	#[test]
	fn observer_sees_every_mutation() {
		let events = Arc::new(Mutex::new(Vec::new()));
		let sink = Arc::clone(&events);
		let mut session = SessionState::default()
			.with_observer(move |e| sink.lock().unwrap().push(e.clone()));

		session.load_preset("tree").unwrap();
		session.submit(session.draft().clone()).unwrap();
		session.degree_centrality().unwrap();

		assert_eq!(
			*events.lock().unwrap(),
			[
				SessionEvent::PresetLoaded(Preset::Tree),
				SessionEvent::GraphSubmitted,
				SessionEvent::ResultUpdated(AlgorithmKind::DegreeCentrality),
			]
		);
	}

	#[test]
	fn notices_follow_error_kind() {
		let notice = Notice::from(&GraphError::NoPath {
			from: "A".into(),
			to: "B".into(),
		});
		assert_eq!(notice.level, NoticeLevel::Error);
		assert_eq!(notice.message, "No path found between the selected nodes.");
		assert_eq!(
			Notice::calculated(AlgorithmKind::DegreeCentrality).message,
			"Calculated Degree Centrality."
		);
		let diverged = Notice::from(&GraphError::LayoutDiverged("A".into()));
		assert_eq!(diverged.level, NoticeLevel::Error);
		assert_eq!(diverged.message, "Failed to lay out the graph.");
	}
}
