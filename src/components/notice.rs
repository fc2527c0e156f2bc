use leptos::prelude::*;

use crate::session::{Notice, NoticeLevel};

fn level_class(level: NoticeLevel) -> &'static str {
	match level {
		NoticeLevel::Info => "notice notice-info",
		NoticeLevel::Success => "notice notice-success",
		NoticeLevel::Warning => "notice notice-warning",
		NoticeLevel::Error => "notice notice-error",
	}
}

/// Shows the latest notice until it is clicked away or replaced.
#[component]
pub fn NoticeBanner() -> impl IntoView {
	let notice = expect_context::<RwSignal<Option<Notice>>>();

	move || {
		notice.get().map(|n| {
			view! {
				<div class=level_class(n.level) role="status" on:click=move |_| notice.set(None)>
					{n.message}
				</div>
			}
		})
	}
}
