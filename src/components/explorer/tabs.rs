//! Tab strip for open files.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PATH_DELIMITER;
use crate::utils::format::file_name;

stylance::import_crate_style!(css, "src/components/explorer/tabs.module.css");

/// One tab per open file, in open order.
#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open_keys = move || ctx.session.with(|s| s.open_keys().to_vec());
    let is_empty = move || ctx.session.with(|s| s.is_empty());

    view! {
        <div class=css::tabs role="tablist">
            <Show
                when=move || !is_empty()
                fallback=|| view! { <span class=css::hint>"Select a file in the tree to open it"</span> }
            >
                <For
                    each=open_keys
                    key=|path| path.clone()
                    children=move |path| view! { <Tab path=path /> }
                />
            </Show>
        </div>
    }
}

#[component]
fn Tab(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = file_name(&path, PATH_DELIMITER).to_string();
    let icon = ic::file_icon(&name);

    let path_for_state = path.clone();
    let is_active = Signal::derive(move || ctx.session.with(|s| s.is_active(&path_for_state)));

    let path_for_select = path.clone();
    let on_select = move |_: leptos::ev::MouseEvent| ctx.select_file(&path_for_select);

    let path_for_close = path.clone();
    let on_close = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_file(&path_for_close);
    };

    let tab_class = move || {
        if is_active.get() {
            format!("{} {}", css::tab, css::active)
        } else {
            css::tab.to_string()
        }
    };

    view! {
        <div
            class=tab_class
            role="tab"
            aria-selected=move || is_active.get().to_string()
            title=path.clone()
            on:click=on_select
        >
            <span class=css::tabIcon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::tabName>{name.clone()}</span>
            <button
                class=css::closeButton
                aria-label=format!("Close {}", name)
                on:click=on_close
            >
                <Icon icon=ic::CLOSE />
            </button>
        </div>
    }
}
