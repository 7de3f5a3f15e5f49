//! File tree component.
//!
//! Renders the listing's tree with directories expanded by default.
//! Clicking a file opens it (or focuses it when already open); clicking a
//! directory collapses or expands it. Collapsed directories are remembered
//! by path, so they stay collapsed across refreshes.

use std::collections::HashSet;

use fwview_core::TreeNode;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, ListingState};
use crate::components::icons as ic;
use crate::utils::format::{node_detail, node_label};

stylance::import_crate_style!(css, "src/components/explorer/tree_view.module.css");

/// Left padding for a row at `depth`.
fn indent(depth: usize) -> String {
    format!("padding-left: {:.2}rem", 0.5 + depth as f32 * 1.0)
}

#[component]
pub fn TreeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let collapsed = RwSignal::new(HashSet::<String>::new());

    view! {
        {move || match ctx.listing.get() {
            ListingState::Loading => view! {
                <p class=css::placeholder>"Loading listing…"</p>
            }
            .into_any(),
            ListingState::Failed(message) => view! {
                <div class=css::error role="alert">
                    <p class=css::errorTitle>"Could not load the file listing"</p>
                    <p class=css::errorDetail>{message}</p>
                    <button class=css::retry on:click=move |_| ctx.refresh()>"Retry"</button>
                </div>
            }
            .into_any(),
            ListingState::Ready(loaded) if loaded.tree.is_empty() => view! {
                <p class=css::placeholder>"No watched files"</p>
            }
            .into_any(),
            ListingState::Ready(loaded) => {
                let nodes: Vec<TreeNode> = loaded
                    .tree
                    .root()
                    .sorted_children()
                    .into_iter()
                    .cloned()
                    .collect();
                view! {
                    <ul class=css::tree role="tree">
                        {nodes
                            .into_iter()
                            .map(|node| view! { <TreeBranch node=node depth=0 collapsed=collapsed /> })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn TreeBranch(
    node: TreeNode,
    depth: usize,
    collapsed: RwSignal<HashSet<String>>,
) -> impl IntoView {
    if node.is_file() {
        return view! { <FileRow node=node depth=depth /> }.into_any();
    }

    let label = node_label(&node);
    let detail = node_detail(&node);
    let path = node.path.clone();
    let children: Vec<TreeNode> = node.sorted_children().into_iter().cloned().collect();

    let path_for_state = path.clone();
    let expanded = Signal::derive(move || collapsed.with(|c| !c.contains(&path_for_state)));

    let toggle = move |_: leptos::ev::MouseEvent| {
        collapsed.update(|c| {
            if !c.remove(&path) {
                c.insert(path.clone());
            }
        });
    };

    view! {
        <li class=css::branch role="treeitem" aria-expanded=move || expanded.get().to_string()>
            <div class=css::row style=indent(depth) on:click=toggle>
                <span class=css::chevron aria-hidden="true">
                    {move || view! {
                        <Icon icon=if expanded.get() { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT } />
                    }}
                </span>
                <span class=css::icon aria-hidden="true">
                    {move || view! {
                        <Icon icon=if expanded.get() { ic::FOLDER_OPEN } else { ic::FOLDER } />
                    }}
                </span>
                <span class=css::dirName>{label}</span>
                <span class=css::detail>{detail}</span>
            </div>

            <Show when=move || expanded.get()>
                <ul class=css::group role="group">
                    {children
                        .iter()
                        .map(|child| view! {
                            <TreeBranch node=child.clone() depth=depth + 1 collapsed=collapsed />
                        })
                        .collect_view()}
                </ul>
            </Show>
        </li>
    }
    .into_any()
}

#[component]
fn FileRow(node: TreeNode, depth: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let label = node_label(&node);
    let detail = node_detail(&node);
    let icon = ic::file_icon(&node.label);

    let key = node.path.clone();
    let key_for_state = key.clone();
    let is_active = Signal::derive(move || ctx.session.with(|s| s.is_active(&key_for_state)));
    let key_for_open = key.clone();
    let is_open = Signal::derive(move || ctx.session.with(|s| s.is_open(&key_for_open)));

    let on_click = move |_: leptos::ev::MouseEvent| ctx.open_file(&key);

    let row_class = move || {
        let mut class = css::row.to_string();
        if is_open.get() {
            class = format!("{} {}", class, css::open);
        }
        if is_active.get() {
            class = format!("{} {}", class, css::active);
        }
        class
    };

    view! {
        <li role="treeitem" aria-selected=move || is_active.get().to_string()>
            <div class=row_class style=indent(depth) on:click=on_click title=node.path.clone()>
                <span class=css::chevron aria-hidden="true"></span>
                <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                <span class=css::fileName>{label}</span>
                <span class=css::detail>{detail}</span>
            </div>
        </li>
    }
}
