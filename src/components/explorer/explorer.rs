//! Main explorer component.
//!
//! ## Layout
//!
//! Header on top, file tree on the left, open-file tabs and the active
//! file's viewer on the right, status bar at the bottom.

use fwview_core::Cycle;
use leptos::prelude::*;

use super::{FileViewer, Header, TabStrip, TreeView};
use crate::app::AppContext;
use crate::components::status::Status;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer view component.
///
/// Keyboard: `Alt+→` / `Alt+←` switch tabs, `Alt+W` closes the active tab.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if !ev.alt_key() {
            return;
        }
        match ev.key().as_str() {
            "ArrowRight" => ctx.cycle_files(Cycle::Next),
            "ArrowLeft" => ctx.cycle_files(Cycle::Previous),
            "w" | "W" => ctx.close_active(),
            _ => return,
        }
        ev.prevent_default();
    };

    view! {
        <div class=css::explorer tabindex="0" on:keydown=on_keydown>
            <Header />

            <div class=css::body>
                <nav class=css::treePane aria-label="Watched files">
                    <TreeView />
                </nav>

                <main class=css::viewPane>
                    <TabStrip />
                    <FileViewer />
                </main>
            </div>

            <Status />
        </div>
    }
}
