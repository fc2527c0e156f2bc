//! Graph explorer: parse a small graph from text, lay it out with a spring
//! simulation and run shortest path, centrality and clustering on it.
//!
//! The engine lives in [`graph`] and [`session`]; the Leptos client-side app
//! (form page, graph page, canvas) is a thin layer on top.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, debug, info};

// Modules
mod components;
pub mod graph;
mod pages;
pub mod session;

// Top-Level pages
use crate::pages::graph::GraphPage;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::session::{Notice, SessionState};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the form, the graph page and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let session = SessionState::default().with_observer(|event| debug!("session: {event:?}"));
	provide_context(RwSignal::new(session));
	provide_context(RwSignal::new(None::<Notice>));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Graph Explorer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/graph") view=GraphPage />
			</Routes>
		</Router>
	}
}
