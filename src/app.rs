//! Root application module.
//!
//! Contains the main App component, the AppContext holding listing and
//! session state, and the refresh flow that feeds them.

use fwview_core::{
    Cycle, FetchError, FileTree, Listing, RefreshGate, RefreshTicket, Session, SessionError,
    TreeBuilder, TreeError, UnavailableNode,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::Explorer;
use crate::config::{
    FILES_ENDPOINT, NOTICE_DURATION_MS, PATH_DELIMITER, REFRESH_ORDERING, default_sibling_order,
};
use crate::utils::{console, fetch_listing};

// ============================================================================
// Listing State
// ============================================================================

/// A listing that has been turned into a display tree.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedListing {
    /// Display tree built from the listing's catalog
    pub tree: FileTree,
    /// Number of entries skipped as malformed
    pub skipped: usize,
    /// Subtrees the backend could not list
    pub unavailable: usize,
}

impl LoadedListing {
    /// Build the display tree, skipping malformed paths.
    ///
    /// One message per skipped entry or unavailable subtree is returned so
    /// the caller can log them.
    pub fn build(listing: Listing) -> (Self, Vec<String>) {
        let (tree, skipped) = TreeBuilder::new()
            .with_delimiter(PATH_DELIMITER)
            .with_order(listing.sibling_order(default_sibling_order()))
            .build_lenient(&listing.catalog);

        let loaded = Self {
            tree,
            skipped: skipped.len(),
            unavailable: listing.unavailable.len(),
        };
        let messages = skipped
            .iter()
            .map(TreeError::to_string)
            .chain(listing.unavailable.iter().map(UnavailableNode::to_string))
            .collect();
        (loaded, messages)
    }
}

/// What the explorer shows in place of the tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingState {
    /// No response applied yet
    #[default]
    Loading,
    /// Latest applied response
    Ready(LoadedListing),
    /// Latest applied response was an error
    Failed(String),
}

impl ListingState {
    pub fn tree(&self) -> Option<&FileTree> {
        match self {
            Self::Ready(loaded) => Some(&loaded.tree),
            _ => None,
        }
    }
}

/// A transient message shown in the status bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    id: u64,
    pub text: String,
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Listing**: latest applied fetch result and the tree built from it
/// - **Session**: open files and the active one; replaced wholesale on every
///   transition
/// - **Refresh gate**: decides which of several overlapping fetches is applied
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Latest applied listing.
    pub listing: RwSignal<ListingState>,

    /// Open files and the active selection.
    pub session: RwSignal<Session>,

    /// Transient notice (unknown file, file not open, ...).
    pub notice: RwSignal<Option<Notice>>,

    /// Whether a refresh newer than the displayed listing is in flight.
    pub refreshing: RwSignal<bool>,

    refresh_gate: RwSignal<RefreshGate>,
    notice_seq: RwSignal<u64>,
}

impl AppContext {
    /// Creates a new application context: loading, nothing open.
    pub fn new() -> Self {
        Self {
            listing: RwSignal::new(ListingState::Loading),
            session: RwSignal::new(Session::new()),
            notice: RwSignal::new(None),
            refreshing: RwSignal::new(false),
            refresh_gate: RwSignal::new(RefreshGate::new(REFRESH_ORDERING)),
            notice_seq: RwSignal::new(0),
        }
    }

    // ------------------------------------------------------------------------
    // Session transitions
    // ------------------------------------------------------------------------

    /// Open a file (or focus it when already open).
    pub fn open_file(&self, key: &str) {
        let result = self.listing.with_untracked(|state| match state.tree() {
            Some(tree) => self.session.with_untracked(|s| s.open(key, tree)),
            None => Err(SessionError::UnknownKey(key.to_string())),
        });
        self.commit(result);
    }

    /// Focus an open file.
    pub fn select_file(&self, key: &str) {
        let result = self.session.with_untracked(|s| s.select(key));
        self.commit(result);
    }

    /// Close a file; closing a file that is not open does nothing.
    pub fn close_file(&self, key: &str) {
        self.session.update(|s| *s = s.close(key));
    }

    /// Close the active file, if any.
    pub fn close_active(&self) {
        let active = self
            .session
            .with_untracked(|s| s.active_key().map(str::to_string));
        if let Some(key) = active {
            self.close_file(&key);
        }
    }

    /// Move focus to the neighbouring tab.
    pub fn cycle_files(&self, direction: Cycle) {
        self.session.update(|s| *s = s.cycle(direction));
    }

    fn commit(&self, result: Result<Session, SessionError>) {
        match result {
            Ok(next) => self.session.set(next),
            Err(err) => {
                console::warn(&err.to_string());
                self.show_notice(err.to_string());
            }
        }
    }

    // ------------------------------------------------------------------------
    // Notices
    // ------------------------------------------------------------------------

    /// Show a notice for `NOTICE_DURATION_MS`.
    ///
    /// A newer notice is not cleared by an older notice's timer.
    pub fn show_notice(&self, text: String) {
        let id = self.notice_seq.get_untracked() + 1;
        self.notice_seq.set(id);
        self.notice.set(Some(Notice { id, text }));

        let notice = self.notice;
        Timeout::new(NOTICE_DURATION_MS, move || {
            if notice.with_untracked(|n| n.as_ref().is_some_and(|n| n.id == id)) {
                notice.set(None);
            }
        })
        .forget();
    }

    // ------------------------------------------------------------------------
    // Refresh
    // ------------------------------------------------------------------------

    /// Start a listing fetch. Does not cancel one already in flight.
    pub fn refresh(&self) {
        let Some(ticket) = self.refresh_gate.try_update(|gate| gate.issue()) else {
            return;
        };
        self.refreshing.set(true);

        let ctx = *self;
        leptos::task::spawn_local(async move {
            let result = fetch_listing(FILES_ENDPOINT).await;
            ctx.apply_listing(ticket, result);
        });
    }

    /// Apply a completed fetch if the refresh gate admits it.
    pub fn apply_listing(&self, ticket: RefreshTicket, result: Result<Listing, FetchError>) {
        let admitted = self
            .refresh_gate
            .try_update(|gate| gate.admit(ticket))
            .unwrap_or(false);
        self.refreshing
            .set(self.refresh_gate.with_untracked(RefreshGate::is_pending));

        if !admitted {
            console::info(&format!("Discarding stale listing #{}", ticket.seq()));
            return;
        }

        match result {
            Ok(listing) => {
                let (loaded, skipped) = LoadedListing::build(listing);
                for message in &skipped {
                    console::warn(&format!("Skipping entry: {}", message));
                }
                self.session.update(|s| *s = s.retain_known(&loaded.tree));
                self.listing.set(ListingState::Ready(loaded));
            }
            Err(err) => {
                console::error(&format!("Listing fetch failed: {}", err));
                self.listing.set(ListingState::Failed(err.to_string()));
            }
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Kicks off the first listing fetch
/// - Renders the Explorer
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.refresh();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0a0e27;
                    color: #e0e0e0;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #ff6b6b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #4a90e2;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Explorer />
        </ErrorBoundary>
    }
}
