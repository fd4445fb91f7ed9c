//! Craftboard Frontend App
//!
//! Main application component: store and context wiring, the header
//! controls, the board, the modals, and the recurring overdue sweep.

use chrono::Utc;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AnalyticsModal, Board, CardDetailModal, CommandPalette, FilterBar, ProjectPicker,
    WorkspaceBar,
};
use crate::context::AppContext;
use crate::models::Priority;
use crate::store::{self, AppState, AppStore};
use crate::timers::TimerHub;
use crate::transitions;

/// How often overdue cards are swept back to the backlog
const SWEEP_INTERVAL_MS: u32 = 60 * 60 * 1000;

fn run_overdue_sweep(store: &AppStore) {
    let today = Utc::now().date_naive();
    store::with_cards(store, |cards| {
        if let Some(next) = transitions::sweep_overdue(cards, today) {
            let moved = cards
                .iter()
                .zip(next.iter())
                .filter(|(before, after)| before.column != after.column)
                .count();
            web_sys::console::log_1(
                &format!("[SWEEP] moved {} overdue card(s) to backlog", moved).into(),
            );
            *cards = next;
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::seed());
    provide_context(store);
    provide_context(TimerHub::new());

    // Filters and modal selection
    let (search_query, set_search_query) = signal(String::new());
    let (filter_priority, set_filter_priority) = signal(None::<Priority>);
    let (filter_type, set_filter_type) = signal(None::<String>);
    let (selected_card, set_selected_card) = signal(None::<String>);
    provide_context(AppContext::new(
        (search_query, set_search_query),
        (filter_priority, set_filter_priority),
        (filter_type, set_filter_type),
        (selected_card, set_selected_card),
    ));

    let (show_analytics, set_show_analytics) = signal(false);
    let (show_palette, set_show_palette) = signal(false);

    // Sweep overdue cards at startup and then hourly. The interval lives
    // as long as the app.
    run_overdue_sweep(&store);
    Interval::new(SWEEP_INTERVAL_MS, move || run_overdue_sweep(&store)).forget();

    view! {
        <div class="app-shell">
            <header class="app-header">
                <ProjectPicker />
                <FilterBar />
                <div class="header-actions">
                    <button class="header-btn" on:click=move |_| set_show_analytics.set(true)>
                        "Analytics"
                    </button>
                    <button class="header-btn" on:click=move |_| set_show_palette.set(true)>
                        "Command"
                    </button>
                </div>
            </header>

            <WorkspaceBar />

            <main class="board-main">
                <Board />
            </main>

            <CardDetailModal />

            <Show when=move || show_analytics.get()>
                <AnalyticsModal on_close=Callback::new(move |_| set_show_analytics.set(false)) />
            </Show>
            <Show when=move || show_palette.get()>
                <CommandPalette on_close=Callback::new(move |_| set_show_palette.set(false)) />
            </Show>
        </div>
    }
}
