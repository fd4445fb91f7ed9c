//! Card Timer Component
//!
//! Play/pause/reset controls over a card's tracked time, with the
//! pomodoro session badge. Ticking itself is owned by the TimerHub so a
//! re-rendered tile never stops a running clock.

use chrono::Utc;
use leptos::prelude::*;

use crate::format::format_elapsed;
use crate::store::{self, use_app_store};
use crate::timers::TimerHub;

#[component]
pub fn CardTimer(card_id: String) -> impl IntoView {
    let store = use_app_store();
    let hub = TimerHub::use_hub();
    let id = StoredValue::new(card_id);

    let cards = store::active_cards(&store);
    let timer = Memo::new(move |_| {
        cards
            .get()
            .into_iter()
            .find(|card| card.id == id.get_value())
            .map(|card| card.timer)
            .unwrap_or_default()
    });

    let on_toggle = move |_| {
        let card_id = id.get_value();
        if timer.get_untracked().is_running {
            hub.stop(&card_id);
            store::update_card(&store, &card_id, |card| card.timer.pause());
        } else {
            store::update_card(&store, &card_id, |card| card.timer.start(Utc::now()));
            hub.start(store, card_id);
        }
    };

    let on_reset = move |_| {
        let state = timer.get_untracked();
        if state.total_seconds == 0 {
            return;
        }
        let card_id = id.get_value();
        hub.stop(&card_id);
        store::update_card(&store, &card_id, |card| card.timer.reset());
    };

    view! {
        <div class="timer-widget">
            <div class="timer-readout">
                <span class=move || {
                    if timer.get().is_running { "timer-clock running" } else { "timer-clock" }
                }>
                    {move || format_elapsed(timer.get().total_seconds)}
                </span>
                <span class="timer-session" title="Pomodoro session">
                    {move || timer.get().session()}
                </span>
            </div>
            <div class="timer-controls">
                <button
                    class="timer-btn"
                    title=move || if timer.get().is_running { "Pause" } else { "Start" }
                    on:click=on_toggle
                >
                    {move || if timer.get().is_running { "⏸" } else { "▶" }}
                </button>
                <button
                    class="timer-btn"
                    title="Reset"
                    disabled=move || timer.get().total_seconds == 0
                    on:click=on_reset
                >
                    "↺"
                </button>
            </div>
        </div>
    }
}
