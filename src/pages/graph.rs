use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::notice::NoticeBanner;
use crate::components::sidebar::GraphSidebar;
use crate::session::SessionState;

/// Where the graph page sends the user instead of rendering, if anywhere.
fn redirect_target(session: &SessionState) -> Option<&'static str> {
	session.scene().is_none().then_some("/")
}

/// Submitted graph with its sidebar. Without a submitted graph the page
/// redirects to the form.
#[component]
pub fn GraphPage() -> impl IntoView {
	let session = expect_context::<RwSignal<SessionState>>();
	let navigate = use_navigate();
	let scene = Signal::derive(move || session.with(|s| s.scene().cloned()));
	let path = Signal::derive(move || session.with(|s| s.path().map(<[_]>::to_vec).unwrap_or_default()));

	Effect::new(move |_| {
		if let Some(target) = session.with(redirect_target) {
			log::debug!("no graph submitted, redirecting to {target}");
			navigate(
				target,
				NavigateOptions {
					replace: true,
					..Default::default()
				},
			);
		}
	});

	view! {
		<div class="graph-page">
			<GraphSidebar />
			<div class="graph-display">
				<NoticeBanner />
				<Show when=move || scene.with(Option::is_some)>
					<ForceGraphCanvas scene=scene path=path />
				</Show>
			</div>
		</div>
	}
}
