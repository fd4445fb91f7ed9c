//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every card
//! mutation funnels through [`with_cards`], which replaces the active
//! project's card vector wholesale; there is exactly one logical writer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Card, ColumnTitles, Project, WorkspaceRecord};
use crate::storage;
use crate::transitions::derive_column;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All projects, each owning its card registry
    pub projects: Vec<Project>,
    /// Currently selected project ID
    pub active_project_id: u32,
    /// Workspace records mirrored to local storage
    pub workspaces: Vec<WorkspaceRecord>,
    /// Currently active workspace ID
    pub active_workspace_id: String,
    /// Monotonic counter backing id allocation
    pub next_id: u64,
}

impl AppState {
    /// Initial state: the three seed projects and the built-in workspaces
    pub fn seed() -> Self {
        let projects = vec![
            Project {
                id: 1,
                name: "Craftboard Project".to_string(),
                description: "Streamline operations with dynamic dashboard solutions".to_string(),
                favorite: false,
                cover_color: "#38bdf8".to_string(),
                column_titles: ColumnTitles::default(),
                cards: Vec::new(),
            },
            Project {
                id: 2,
                name: "Marketing Dashboard".to_string(),
                description: "Track and analyze marketing performance".to_string(),
                favorite: false,
                cover_color: "#f472b6".to_string(),
                column_titles: ColumnTitles::default(),
                cards: Vec::new(),
            },
            Project {
                id: 3,
                name: "Finance Flow".to_string(),
                description: "Manage financial operations efficiently".to_string(),
                favorite: false,
                cover_color: "#4ade80".to_string(),
                column_titles: ColumnTitles::default(),
                cards: Vec::new(),
            },
        ];
        Self {
            projects,
            active_project_id: 1,
            workspaces: storage::builtin_workspaces(),
            active_workspace_id: "default".to_string(),
            next_id: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Allocate a fresh id with the given prefix, e.g. "card-7"
pub fn next_id(store: &AppStore, prefix: &str) -> String {
    let binding = store.next_id();
    let mut counter = binding.write();
    *counter += 1;
    format!("{}-{}", prefix, *counter)
}

// ========================
// Card Registry Helpers
// ========================

/// Run `f` against the active project's card vector.
///
/// This is the single mutation funnel for the registry; every other card
/// helper goes through it. Returns `None` when no project is active.
pub fn with_cards<R>(store: &AppStore, f: impl FnOnce(&mut Vec<Card>) -> R) -> Option<R> {
    let active = store.active_project_id().get_untracked();
    let binding = store.projects();
    let mut projects = binding.write();
    projects
        .iter_mut()
        .find(|project| project.id == active)
        .map(|project| f(&mut project.cards))
}

/// Reactive clone of the active project's cards
pub fn active_cards(store: &AppStore) -> Memo<Vec<Card>> {
    let store = *store;
    Memo::new(move |_| {
        let active = store.active_project_id().get();
        store
            .projects()
            .get()
            .into_iter()
            .find(|project| project.id == active)
            .map(|project| project.cards)
            .unwrap_or_default()
    })
}

/// Reactive clone of the active project's column titles
pub fn active_column_titles(store: &AppStore) -> Memo<ColumnTitles> {
    let store = *store;
    Memo::new(move |_| {
        let active = store.active_project_id().get();
        store
            .projects()
            .get()
            .into_iter()
            .find(|project| project.id == active)
            .map(|project| project.column_titles)
            .unwrap_or_default()
    })
}

/// Append a card to the registry
pub fn push_card(store: &AppStore, card: Card) {
    with_cards(store, |cards| cards.push(card));
}

/// Replace the whole registry
pub fn replace_cards(store: &AppStore, next: Vec<Card>) {
    with_cards(store, |cards| *cards = next);
}

/// Update one card in place by ID
pub fn update_card(store: &AppStore, card_id: &str, f: impl FnOnce(&mut Card)) {
    with_cards(store, |cards| {
        if let Some(card) = cards.iter_mut().find(|card| card.id == card_id) {
            f(card);
        }
    });
}

/// Remove a card from the registry by ID
pub fn remove_card(store: &AppStore, card_id: &str) {
    with_cards(store, |cards| cards.retain(|card| card.id != card_id));
}

/// Mutate a card's checklist, then re-derive its column.
///
/// The derived transition is what auto-moves a fully checked card to Done.
pub fn update_checklists(
    store: &AppStore,
    card_id: &str,
    f: impl FnOnce(&mut Vec<crate::models::ChecklistItem>),
) {
    update_card(store, card_id, |card| {
        f(&mut card.checklists);
        card.column = derive_column(card);
    });
}

// ========================
// Project Helpers
// ========================

/// Toggle a project's favorite flag
pub fn toggle_favorite(store: &AppStore, project_id: u32) {
    let binding = store.projects();
    let mut projects = binding.write();
    if let Some(project) = projects.iter_mut().find(|project| project.id == project_id) {
        project.favorite = !project.favorite;
    }
}

/// Switch the active project
pub fn set_active_project(store: &AppStore, project_id: u32) {
    store.active_project_id().set(project_id);
}

// ========================
// Workspace Helpers
// ========================

/// Add a workspace record and make it active
pub fn add_workspace(store: &AppStore, workspace: WorkspaceRecord) {
    let id = workspace.id.clone();
    store.workspaces().write().push(workspace);
    store.active_workspace_id().set(id);
}

/// Remove a workspace record; falls back to the default workspace if the
/// active one was removed
pub fn remove_workspace(store: &AppStore, workspace_id: &str) {
    store
        .workspaces()
        .write()
        .retain(|workspace| workspace.id != workspace_id);
    if store.active_workspace_id().get_untracked() == workspace_id {
        store.active_workspace_id().set("default".to_string());
    }
}
