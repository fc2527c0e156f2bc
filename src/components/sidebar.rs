use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::graph::{AlgorithmKind, GraphError, NodeScores, format_path, format_score};
use crate::session::{Notice, SessionState};

fn score_rows(scores: Option<&NodeScores>) -> Vec<(String, String)> {
	scores
		.map(|s| s.iter().map(|(id, v)| (id.clone(), format_score(*v))).collect())
		.unwrap_or_default()
}

#[component]
fn ResultTable(title: &'static str, #[prop(into)] rows: Signal<Vec<(String, String)>>) -> impl IntoView {
	view! {
		<Show when=move || rows.with(|r| !r.is_empty())>
			<div class="result-table">
				<h4>{title}</h4>
				<ul>
					{move || {
						rows.get()
							.into_iter()
							.map(|(id, value)| view! {
								<li>
									<span class="result-key">{id}</span>
									<span class="result-value">{value}</span>
								</li>
							})
							.collect_view()
					}}
				</ul>
			</div>
		</Show>
	}
}

/// Statistics and algorithm controls for the submitted graph.
#[component]
pub fn GraphSidebar() -> impl IntoView {
	let session = expect_context::<RwSignal<SessionState>>();
	let notice = expect_context::<RwSignal<Option<Notice>>>();
	let (start, end) = (RwSignal::new(String::new()), RwSignal::new(String::new()));

	let report = move |outcome: Option<Result<(), GraphError>>, kind: AlgorithmKind| match outcome {
		Some(Ok(())) => notice.set(Some(Notice::calculated(kind))),
		Some(Err(err)) => notice.set(Some(Notice::from(&err))),
		None => {}
	};

	let find_path = move |_: MouseEvent| {
		let (from, to) = (start.get_untracked(), end.get_untracked());
		let outcome = session.try_update(|s| s.shortest_path(&from, &to).map(drop));
		match outcome {
			Some(Ok(())) => notice.set(None),
			other => report(other, AlgorithmKind::ShortestPath),
		}
	};
	let centrality = move |_: MouseEvent| {
		report(
			session.try_update(|s| s.degree_centrality().map(drop)),
			AlgorithmKind::DegreeCentrality,
		)
	};
	let clustering = move |_: MouseEvent| {
		report(
			session.try_update(|s| s.clustering_coefficient().map(drop)),
			AlgorithmKind::Clustering,
		)
	};

	let node_options = move || {
		session
			.with(|s| s.node_ids().to_vec())
			.into_iter()
			.map(|id| {
				let value = id.clone();
				view! { <option value=value>{id}</option> }
			})
			.collect_view()
	};
	let stats_rows = move || {
		session.with(|s| {
			s.stats()
				.map(|st| st.entries())
				.unwrap_or_default()
				.into_iter()
				.map(|(key, value)| view! {
					<div class="stat-row">
						<span class="stat-key">{key}</span>
						<span class="stat-value">{value}</span>
					</div>
				})
				.collect_view()
		})
	};
	let path_text = move || session.with(|s| s.path().map(format_path));

	let centrality_rows = Signal::derive(move || session.with(|s| score_rows(s.centrality())));
	let clustering_rows = Signal::derive(move || session.with(|s| score_rows(s.clustering())));

	view! {
		<aside class="graph-sidebar">
			<A href="/">"← New Graph"</A>

			<section class="stats">
				<h3>"Graph Statistics"</h3>
				{stats_rows}
			</section>

			<section class="algorithms">
				<h3>"Graph Algorithms"</h3>

				<h4>"Shortest Path"</h4>
				<div class="path-pickers">
					<select on:change=move |ev| start.set(event_target_value(&ev))>
						<option value="">"Start Node"</option>
						{node_options}
					</select>
					<select on:change=move |ev| end.set(event_target_value(&ev))>
						<option value="">"End Node"</option>
						{node_options}
					</select>
				</div>
				<button on:click=find_path>"Find Path"</button>
				{move || path_text().map(|p| view! {
					<div class="path-result">
						<p class="path-label">"Path:"</p>
						<p class="path-value">{p}</p>
					</div>
				})}

				<button on:click=centrality>"Calculate Degree Centrality"</button>
				<ResultTable title=AlgorithmKind::DegreeCentrality.title() rows=centrality_rows />

				<button on:click=clustering>"Calculate Clustering Coefficient"</button>
				<ResultTable title=AlgorithmKind::Clustering.title() rows=clustering_rows />
			</section>
		</aside>
	}
}
