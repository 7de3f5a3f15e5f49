//! Explorer header component.
//!
//! Application title and the refresh action.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION, FILES_ENDPOINT};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with title and refresh button.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_refresh = move |_: leptos::ev::MouseEvent| ctx.refresh();

    let refresh_class = move || {
        if ctx.refreshing.get() {
            format!("{} {}", css::actionButton, css::spinning)
        } else {
            css::actionButton.to_string()
        }
    };

    view! {
        <header class=css::header>
            <div class=css::title>
                <span class=css::titleIcon><Icon icon=ic::FOLDER_OPEN /></span>
                <span class=css::titleLabel>{APP_NAME}</span>
                <span class=css::titleMeta>{format!("v{} · {}", APP_VERSION, FILES_ENDPOINT)}</span>
            </div>

            <button
                class=refresh_class
                on:click=on_refresh
                title="Refresh listing"
                aria-label="Refresh listing"
            >
                <Icon icon=ic::REFRESH />
            </button>
        </header>
    }
}
