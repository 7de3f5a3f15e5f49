//! Status bar component.
//!
//! Displays listing state, open-file count, refresh activity, and the
//! current transient notice.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, ListingState};
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Status bar shown below the explorer.
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let listing_summary = Signal::derive(move || {
        ctx.listing.with(|state| match state {
            ListingState::Loading => "Loading".to_string(),
            ListingState::Failed(_) => "Listing unavailable".to_string(),
            ListingState::Ready(loaded) => match loaded.tree.leaf_count() {
                1 => "1 file".to_string(),
                n => format!("{} files", n),
            },
        })
    });

    let skipped = Signal::derive(move || {
        ctx.listing.with(|state| match state {
            ListingState::Ready(loaded) => loaded.skipped,
            _ => 0,
        })
    });

    let unavailable = Signal::derive(move || {
        ctx.listing.with(|state| match state {
            ListingState::Ready(loaded) => loaded.unavailable,
            _ => 0,
        })
    });

    let open_count = Signal::derive(move || ctx.session.with(|s| s.len()));

    view! {
        <footer class=css::bar>
            <div class=css::section>
                <span class=css::label>
                    <span class=css::labelText>"Listing:"</span>
                    <span class=css::value>{listing_summary}</span>
                </span>

                <Show when=move || { skipped.get() > 0 }>
                    <span class=css::labelWarn title="Entries with malformed paths">
                        <span class=css::value>{move || format!("{} skipped", skipped.get())}</span>
                    </span>
                </Show>

                <Show when=move || { unavailable.get() > 0 }>
                    <span class=css::labelWarn title="Directories the backend could not list">
                        <span class=css::value>
                            {move || format!("{} unavailable", unavailable.get())}
                        </span>
                    </span>
                </Show>

                <span class=css::label>
                    <span class=css::labelText>"Open:"</span>
                    <span class=css::value>{open_count}</span>
                </span>

                <Show when=move || ctx.refreshing.get()>
                    <span class=css::labelMuted>"Refreshing…"</span>
                </Show>
            </div>

            {move || ctx.notice.get().map(|notice| view! {
                <span class=css::notice role="status">
                    <span class=css::labelIcon><Icon icon=ic::INFO /></span>
                    <span class=css::value>{notice.text}</span>
                </span>
            })}
        </footer>
    }
}
