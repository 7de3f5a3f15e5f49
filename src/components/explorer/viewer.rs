//! File viewer panels.
//!
//! One panel per open file; only the active one is visible. A panel shows
//! the metadata the latest listing reports for its file, or a placeholder
//! while no listing is available.

use fwview_core::NodeKind;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PATH_DELIMITER;
use crate::utils::format::{file_name, format_mtime, format_size};

stylance::import_crate_style!(css, "src/components/explorer/viewer.module.css");

#[component]
pub fn FileViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let has_active = move || ctx.session.with(|s| s.active_key().is_some());

    view! {
        <Show
            when=has_active
            fallback=|| view! {
                <div class=css::empty>
                    <Icon icon=ic::FILE />
                    <p>"No file open"</p>
                </div>
            }
        >
            <For
                each=move || ctx.session.with(|s| s.open_keys().to_vec())
                key=|path| path.clone()
                children=move |path| view! { <ViewerPanel path=path /> }
            />
        </Show>
    }
}

#[component]
fn ViewerPanel(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = file_name(&path, PATH_DELIMITER).to_string();
    let icon = ic::file_icon(&name);

    let path_for_state = path.clone();
    let is_active = Signal::derive(move || ctx.session.with(|s| s.is_active(&path_for_state)));

    // (size, mtime) from the latest listing, if it still has the file
    let path_for_meta = path.clone();
    let metadata = Memo::new(move |_| {
        ctx.listing.with(|state| {
            state
                .tree()
                .and_then(|tree| tree.file(&path_for_meta))
                .and_then(|node| match &node.kind {
                    NodeKind::File { size, mtime } => {
                        Some((format_size(*size), format_mtime(mtime)))
                    }
                    NodeKind::Directory => None,
                })
        })
    });

    view! {
        <section
            class=css::panel
            role="tabpanel"
            hidden=move || !is_active.get()
            aria-label=name.clone()
        >
            <header class=css::panelHeader>
                <span class=css::panelIcon aria-hidden="true"><Icon icon=icon /></span>
                <h2 class=css::panelTitle>{name.clone()}</h2>
            </header>
            {move || match metadata.get() {
                Some((size, mtime)) => view! {
                    <dl class=css::meta>
                        <dt>"Path"</dt>
                        <dd class=css::mono>{path.clone()}</dd>
                        <dt>"Size"</dt>
                        <dd>{size}</dd>
                        <dt>"Modified"</dt>
                        <dd>{mtime}" UTC"</dd>
                    </dl>
                }
                .into_any(),
                None => view! {
                    <p class=css::unavailable>
                        <span class=css::mono>{path.clone()}</span>
                        " : metadata unavailable"
                    </p>
                }
                .into_any(),
            }}
        </section>
    }
}
