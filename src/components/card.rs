//! Card Tile Component
//!
//! A draggable card in a column: badges, checklist progress, tracked
//! time, footer counts, inline delete and the timer popup. Clicking the
//! tile opens the detail modal.

use leptos::prelude::*;
use leptos_dropline::set_drag_payload;
use web_sys::DragEvent;

use crate::components::{CardTimer, DeleteConfirmButton};
use crate::context::AppContext;
use crate::format::format_elapsed;
use crate::models::{Card, Priority};
use crate::store::{self, use_app_store};
use crate::timers::TimerHub;

#[component]
pub fn CardTile(card: Card) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let hub = TimerHub::use_hub();

    let (show_timer, set_show_timer) = signal(false);

    let drag_id = card.id.clone();
    let open_id = card.id.clone();
    let delete_id = card.id.clone();
    let timer_card_id = card.id.clone();
    let elapsed_id = card.id.clone();

    // Tracked time keeps ticking while the tile itself is static, so it
    // reads from the store rather than the snapshot prop.
    let cards = store::active_cards(&store);
    let elapsed = Memo::new(move |_| {
        cards
            .get()
            .into_iter()
            .find(|c| c.id == elapsed_id)
            .map(|c| c.timer.total_seconds)
            .unwrap_or(0)
    });

    let priority_class = match card.priority {
        Priority::Low => "priority-badge low",
        Priority::Medium => "priority-badge medium",
        Priority::High => "priority-badge high",
    };

    let checklist_total = card.checklists.len();
    let checklist_done = card.checklist_done();
    let progress_pct = if checklist_total > 0 {
        checklist_done as f64 / checklist_total as f64 * 100.0
    } else {
        0.0
    };

    let on_dragstart = move |ev: DragEvent| {
        set_drag_payload(&ev, &drag_id);
    };

    let on_open = move |_| {
        ctx.open_card(open_id.clone());
    };

    let on_delete = Callback::new(move |_| {
        hub.stop(&delete_id);
        store::remove_card(&store, &delete_id);
    });

    view! {
        <div
            class="card-tile"
            draggable="true"
            on:dragstart=on_dragstart
            on:click=on_open
        >
            <div class="card-head">
                <div class="card-badges">
                    <span class=priority_class>{card.priority.label()}</span>
                    {(!card.card_type.is_empty()).then(|| view! {
                        <span class="type-badge">{card.card_type.clone()}</span>
                    })}
                </div>
                <div class="card-actions">
                    <button
                        class="timer-toggle-btn"
                        title="Timer"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_show_timer.update(|v| *v = !*v);
                        }
                    >
                        "⏱"
                    </button>
                    <DeleteConfirmButton button_class="card-delete-btn" on_confirm=on_delete />
                </div>
            </div>

            <div class="card-time-row">
                <span class="card-time-label">"Time spent:"</span>
                <span class="card-time-value">{move || format_elapsed(elapsed.get())}</span>
            </div>

            {(checklist_total > 0).then(|| view! {
                <div class="card-progress">
                    <div class="card-progress-caption">
                        <span>"Checklist"</span>
                        <span>{format!("{}/{}", checklist_done, checklist_total)}</span>
                    </div>
                    <div class="card-progress-track">
                        <div class="card-progress-fill" style=format!("width: {}%;", progress_pct)></div>
                    </div>
                </div>
            })}

            <h4 class="card-title">{card.title.clone()}</h4>
            {(!card.description.is_empty()).then(|| view! {
                <p class="card-description">{card.description.clone()}</p>
            })}

            <div class="card-dates">
                <p>"Creation: " <span>{card.date.format("%Y-%m-%d").to_string()}</span></p>
                {card.deadline.map(|deadline| view! {
                    <p>"Deadline: " <span class="card-deadline">{deadline.format("%Y-%m-%d").to_string()}</span></p>
                })}
            </div>

            <div class="card-foot">
                <div class="card-assignees">
                    {card.assignees.iter().map(|src| view! {
                        <img class="assignee-avatar" src=src.clone() alt="assignee" />
                    }).collect_view()}
                </div>
                <div class="card-counts">
                    <span title="Checklist items">"☑ " {checklist_total}</span>
                    <span title="Comments">"💬 " {card.comments.len()}</span>
                    <span title="Links">"🔗 " {card.links.len()}</span>
                    <span title="Attachments">"📎 " {card.attachments.len()}</span>
                </div>
            </div>

            <Show when=move || show_timer.get()>
                <div class="card-timer-popup" on:click=|ev| ev.stop_propagation()>
                    <CardTimer card_id=timer_card_id.clone() />
                </div>
            </Show>
        </div>
    }
}
