//! Add Card Component
//!
//! Expanding form at the foot of each column. A blank title is silently
//! rejected; cards added from a non-default column still land in TODO.

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;

use crate::models::{Card, ColumnKind, Priority, CARD_TYPES};
use crate::store::{self, use_app_store};

#[component]
pub fn AddCard(column: ColumnKind, #[prop(optional)] is_default: bool) -> impl IntoView {
    let store = use_app_store();

    let (adding, set_adding) = signal(false);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(Priority::Low);
    let (card_type, set_card_type) = signal(String::from("Front-End"));
    let (custom_type, set_custom_type) = signal(false);
    let (deadline, set_deadline) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }

        let dest = if is_default { column } else { ColumnKind::Todo };
        let id = store::next_id(&store, "card");
        let mut card = Card::new(id, text.trim().to_string(), dest, Utc::now());
        card.description = description.get();
        card.priority = priority.get();
        card.card_type = card_type.get();
        card.deadline = NaiveDate::parse_from_str(deadline.get().trim(), "%Y-%m-%d").ok();
        store::push_card(&store, card);

        set_title.set(String::new());
        set_description.set(String::new());
        set_deadline.set(String::new());
        set_adding.set(false);
    };

    view! {
        {move || if adding.get() {
            view! {
                <form class="add-card-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Task title..."
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description..."
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>

                    <div class="add-card-selectors">
                        <select on:change=move |ev| {
                            if let Some(p) = Priority::from_label(&event_target_value(&ev)) {
                                set_priority.set(p);
                            }
                        }>
                            {Priority::ALL.into_iter().map(|p| {
                                let label = p.label();
                                view! {
                                    <option value=label selected=move || priority.get().label() == label>
                                        {label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>

                        {move || if custom_type.get() {
                            view! {
                                <div class="custom-type-entry">
                                    <input
                                        type="text"
                                        placeholder="Enter your own type..."
                                        prop:value=move || card_type.get()
                                        on:input=move |ev| set_card_type.set(event_target_value(&ev))
                                    />
                                    <button type="button" on:click=move |_| set_custom_type.set(false)>
                                        "Done"
                                    </button>
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <select on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    if value == "__custom__" {
                                        set_custom_type.set(true);
                                        set_card_type.set(String::new());
                                    } else {
                                        set_card_type.set(value);
                                    }
                                }>
                                    {CARD_TYPES.iter().map(|t| view! {
                                        <option value=*t selected=move || card_type.get() == *t>{*t}</option>
                                    }).collect_view()}
                                    <option value="__custom__">"Custom…"</option>
                                </select>
                            }.into_any()
                        }}
                    </div>

                    <input
                        type="date"
                        prop:value=move || deadline.get()
                        on:input=move |ev| set_deadline.set(event_target_value(&ev))
                    />

                    <div class="add-card-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| set_adding.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="submit-btn">"Add +"</button>
                    </div>
                </form>
            }.into_any()
        } else {
            view! {
                <button class="add-card-btn" on:click=move |_| set_adding.set(true)>
                    "+ Add card"
                </button>
            }.into_any()
        }}
    }
}
