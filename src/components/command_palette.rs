//! Command Palette Component
//!
//! Searchable list of quick actions over the active board. Destructive
//! bulk actions go through the browser confirmation dialog.

use chrono::{Duration, Utc};
use leptos::prelude::*;

use crate::models::{Card, ColumnKind, Priority};
use crate::store::{self, use_app_store, AppStore};
use crate::timers::TimerHub;
use crate::transitions;

#[derive(Clone, Copy, PartialEq)]
enum PaletteAction {
    AddTask,
    AddBacklogTask,
    ClearCompleted,
    MoveOverdue,
    ArchiveOld,
}

struct PaletteEntry {
    action: PaletteAction,
    title: &'static str,
    description: &'static str,
}

const ENTRIES: &[PaletteEntry] = &[
    PaletteEntry {
        action: PaletteAction::AddTask,
        title: "Add New Task",
        description: "Create a new task in the TODO column",
    },
    PaletteEntry {
        action: PaletteAction::AddBacklogTask,
        title: "Add to Backlog",
        description: "Create a new task in the Backlog",
    },
    PaletteEntry {
        action: PaletteAction::ClearCompleted,
        title: "Clear Completed Tasks",
        description: "Remove all tasks from the Done column",
    },
    PaletteEntry {
        action: PaletteAction::MoveOverdue,
        title: "Move Overdue Tasks",
        description: "Move overdue tasks to the backlog now",
    },
    PaletteEntry {
        action: PaletteAction::ArchiveOld,
        title: "Archive Old Tasks",
        description: "Move done tasks older than 30 days to the backlog",
    },
];

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn run_action(store: &AppStore, hub: &TimerHub, action: PaletteAction) {
    match action {
        PaletteAction::AddTask => {
            let id = store::next_id(store, "card");
            let mut card = Card::new(id, "New Task".to_string(), ColumnKind::Todo, Utc::now());
            card.priority = Priority::Medium;
            store::push_card(store, card);
        }
        PaletteAction::AddBacklogTask => {
            let id = store::next_id(store, "card");
            let mut card = Card::new(id, "Backlog Task".to_string(), ColumnKind::Backlog, Utc::now());
            card.card_type = "Research".to_string();
            store::push_card(store, card);
        }
        PaletteAction::ClearCompleted => {
            if !confirm("Are you sure you want to clear all completed tasks?") {
                return;
            }
            store::with_cards(store, |cards| {
                for card in cards.iter().filter(|card| card.column == ColumnKind::Done) {
                    hub.stop(&card.id);
                }
                cards.retain(|card| card.column != ColumnKind::Done);
            });
        }
        PaletteAction::MoveOverdue => {
            let today = Utc::now().date_naive();
            store::with_cards(store, |cards| {
                if let Some(next) = transitions::sweep_overdue(cards, today) {
                    *cards = next;
                }
            });
        }
        PaletteAction::ArchiveOld => {
            let cutoff = Utc::now() - Duration::days(30);
            store::with_cards(store, |cards| {
                let old = cards
                    .iter()
                    .filter(|card| card.column == ColumnKind::Done && card.created_at < cutoff)
                    .count();
                if old == 0 {
                    return;
                }
                for card in cards.iter_mut() {
                    if card.column == ColumnKind::Done && card.created_at < cutoff {
                        card.column = ColumnKind::Backlog;
                    }
                }
                web_sys::console::log_1(&format!("[BOARD] archived {} old task(s)", old).into());
            });
        }
    }
}

#[component]
pub fn CommandPalette(on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let hub = TimerHub::use_hub();
    let (query, set_query) = signal(String::new());

    let visible = move || {
        let needle = query.get().trim().to_lowercase();
        ENTRIES
            .iter()
            .filter(|entry| {
                needle.is_empty()
                    || entry.title.to_lowercase().contains(&needle)
                    || entry.description.to_lowercase().contains(&needle)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal command-palette" on:click=|ev| ev.stop_propagation()>
                <input
                    type="search"
                    class="palette-search"
                    placeholder="Type a command..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <div class="palette-list">
                    <For
                        each=visible
                        key=|entry| entry.title
                        children=move |entry: &'static PaletteEntry| {
                            view! {
                                <button
                                    class="palette-entry"
                                    on:click=move |_| {
                                        run_action(&store, &hub, entry.action);
                                        on_close.run(());
                                    }
                                >
                                    <span class="palette-title">{entry.title}</span>
                                    <span class="palette-description">{entry.description}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
