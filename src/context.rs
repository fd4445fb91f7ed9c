//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Priority;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Free-text board search - read
    pub search_query: ReadSignal<String>,
    set_search_query: WriteSignal<String>,
    /// Priority filter; None means All - read
    pub filter_priority: ReadSignal<Option<Priority>>,
    set_filter_priority: WriteSignal<Option<Priority>>,
    /// Type filter; None means All - read
    pub filter_type: ReadSignal<Option<String>>,
    set_filter_type: WriteSignal<Option<String>>,
    /// Card shown in the detail modal - read
    pub selected_card: ReadSignal<Option<String>>,
    set_selected_card: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        search_query: (ReadSignal<String>, WriteSignal<String>),
        filter_priority: (ReadSignal<Option<Priority>>, WriteSignal<Option<Priority>>),
        filter_type: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        selected_card: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            search_query: search_query.0,
            set_search_query: search_query.1,
            filter_priority: filter_priority.0,
            set_filter_priority: filter_priority.1,
            filter_type: filter_type.0,
            set_filter_type: filter_type.1,
            selected_card: selected_card.0,
            set_selected_card: selected_card.1,
        }
    }

    pub fn set_search(&self, query: String) {
        self.set_search_query.set(query);
    }

    pub fn set_priority_filter(&self, priority: Option<Priority>) {
        self.set_filter_priority.set(priority);
    }

    pub fn set_type_filter(&self, card_type: Option<String>) {
        self.set_filter_type.set(card_type);
    }

    /// Open the detail modal for a card
    pub fn open_card(&self, card_id: String) {
        self.set_selected_card.set(Some(card_id));
    }

    /// Close the detail modal
    pub fn close_card(&self) {
        self.set_selected_card.set(None);
    }
}
