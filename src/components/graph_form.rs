use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::graph::{GraphInput, Preset};
use crate::session::{Notice, SessionState};

/// Nodes/edges form with preset buttons. A successful submit moves to the
/// graph page.
#[component]
pub fn GraphForm() -> impl IntoView {
	let session = expect_context::<RwSignal<SessionState>>();
	let notice = expect_context::<RwSignal<Option<Notice>>>();
	let navigate = use_navigate();

	let edit_draft = move |edit: &dyn Fn(&mut GraphInput)| {
		session.update(|s| {
			let mut draft = s.draft().clone();
			edit(&mut draft);
			s.set_draft(draft);
		});
	};

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let input = session.with_untracked(|s| s.draft().clone());
		match session.try_update(|s| s.submit(input)) {
			Some(Ok(())) => {
				notice.set(None);
				navigate("/graph", Default::default());
			}
			Some(Err(err)) => notice.set(Some(Notice::from(&err))),
			None => {}
		}
	};

	let preset_buttons = Preset::ALL
		.into_iter()
		.map(|preset| {
			let load = move |_: MouseEvent| match session.try_update(|s| s.load_preset(preset.name())) {
				Some(Ok(p)) => notice.set(Some(Notice::preset_loaded(p))),
				Some(Err(err)) => notice.set(Some(Notice::from(&err))),
				None => {}
			};
			view! {
				<button type="button" class="preset-button" on:click=load>
					{preset.label()}
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="graph-form">
			<h1>"Graph Data Generator"</h1>
			<p class="subtitle">"Input your graph data or use a preset to get started."</p>
			<form on:submit=on_submit>
				<label for="nodes_text">"Nodes"</label>
				<textarea
					id="nodes_text"
					name="nodes_text"
					rows="3"
					placeholder="e.g., A, B, C, D"
					prop:value=move || session.with(|s| s.draft().nodes_text.clone())
					on:input=move |ev| {
						let value = event_target_value(&ev);
						edit_draft(&move |d: &mut GraphInput| d.nodes_text = value.clone());
					}
				/>

				<label for="edges_text">"Edges"</label>
				<textarea
					id="edges_text"
					name="edges_text"
					rows="5"
					placeholder="e.g., A, B\nB, C\nC, D"
					prop:value=move || session.with(|s| s.draft().edges_text.clone())
					on:input=move |ev| {
						let value = event_target_value(&ev);
						edit_draft(&move |d: &mut GraphInput| d.edges_text = value.clone());
					}
				/>

				<div class="presets">
					<span>"Load an Example:"</span>
					{preset_buttons}
				</div>

				<fieldset>
					<legend>"Graph Type"</legend>
					<label>
						<input
							type="radio"
							name="graph_type"
							value="undirected"
							prop:checked=move || !session.with(|s| s.draft().directed)
							on:change=move |_| edit_draft(&|d: &mut GraphInput| d.directed = false)
						/>
						"Undirected"
					</label>
					<label>
						<input
							type="radio"
							name="graph_type"
							value="directed"
							prop:checked=move || session.with(|s| s.draft().directed)
							on:change=move |_| edit_draft(&|d: &mut GraphInput| d.directed = true)
						/>
						"Directed"
					</label>
				</fieldset>

				<button type="submit" class="submit-button">"Generate Graph"</button>
			</form>
		</div>
	}
}
