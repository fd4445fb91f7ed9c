//! Filter Bar Component
//!
//! Search input plus priority and type selectors feeding the column
//! visibility predicate.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{Priority, CARD_TYPES};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search tasks..."
                prop:value=move || ctx.search_query.get()
                on:input=move |ev| ctx.set_search(event_target_value(&ev))
            />

            <select
                class="filter-select"
                on:change=move |ev| {
                    ctx.set_priority_filter(Priority::from_label(&event_target_value(&ev)));
                }
            >
                <option value="All">"All priorities"</option>
                {Priority::ALL.into_iter().map(|p| {
                    let label = p.label();
                    view! {
                        <option value=label selected=move || ctx.filter_priority.get() == Some(p)>
                            {label}
                        </option>
                    }
                }).collect_view()}
            </select>

            <select
                class="filter-select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.set_type_filter((value != "All").then_some(value));
                }
            >
                <option value="All">"All types"</option>
                {CARD_TYPES.iter().map(|t| view! {
                    <option value=*t selected=move || ctx.filter_type.get().as_deref() == Some(*t)>
                        {*t}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
