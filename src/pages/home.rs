use leptos::prelude::*;

use crate::components::graph_form::GraphForm;
use crate::components::notice::NoticeBanner;

/// Landing page with the graph input form.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="home">
				<header class="brand">
					<a href="/">"Graph Explorer"</a>
				</header>
				<NoticeBanner />
				<GraphForm />
			</main>
		</ErrorBoundary>
	}
}
