//! Per-Card Tick Scheduling
//!
//! One repeating one-second callback per running card timer, keyed by
//! card id. Intervals are independent of each other and of component
//! lifetimes, so a re-rendered tile never silently stops its clock.
//! Dropping an interval cancels it.

use std::collections::HashMap;

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::store::{self, AppStore};

/// Owner of the running per-card intervals, provided via context
#[derive(Clone, Copy)]
pub struct TimerHub {
    ticks: StoredValue<HashMap<String, Interval>, LocalStorage>,
}

impl TimerHub {
    pub fn new() -> Self {
        Self { ticks: StoredValue::new_local(HashMap::new()) }
    }

    pub fn use_hub() -> TimerHub {
        expect_context::<TimerHub>()
    }

    /// Start ticking a card's timer once per second.
    ///
    /// Replacing an existing interval drops (and thereby cancels) it, so
    /// starting twice never double-ticks.
    pub fn start(&self, store: AppStore, card_id: String) {
        let id = card_id.clone();
        let interval = Interval::new(1_000, move || {
            store::update_card(&store, &id, |card| card.timer.tick());
        });
        self.ticks.update_value(|ticks| {
            ticks.insert(card_id, interval);
        });
    }

    /// Stop ticking a card's timer; no-op when it was not running.
    pub fn stop(&self, card_id: &str) {
        self.ticks.update_value(|ticks| {
            ticks.remove(card_id);
        });
    }
}
