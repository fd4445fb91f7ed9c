//! Column Component
//!
//! One board column: renders the cards that pass the active filters,
//! hosts the drag handlers, and commits drops through the reorder logic.
//! Drop slots are chosen by measuring the rendered indicator lines and
//! feeding the geometry to the pure nearest-anchor selection.

use std::collections::HashMap;

use leptos::html::Div;
use leptos::prelude::*;
use leptos_dropline::{
    anchor_top, drag_payload, nearest_anchor, DropAnchor, DropLine, DropSlot,
};
use web_sys::DragEvent;

use crate::components::{AddCard, CardTile};
use crate::context::AppContext;
use crate::filter::CardFilter;
use crate::models::ColumnKind;
use crate::reorder;
use crate::store::{self, use_app_store};

/// Pixel bias below each indicator's top edge when picking the nearest
/// drop slot, so a card dropped slightly above a line still targets the
/// slot above it.
pub const DROP_BIAS_PX: f64 = 50.0;

#[component]
pub fn Column(
    kind: ColumnKind,
    #[prop(into)] title: Signal<String>,
    #[prop(optional)] is_default: bool,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let cards = store::active_cards(&store);
    let filtered = Memo::new(move |_| {
        let filter = CardFilter {
            query: ctx.search_query.get(),
            priority: ctx.filter_priority.get(),
            card_type: ctx.filter_type.get(),
        };
        cards
            .get()
            .into_iter()
            .filter(|card| filter.matches(card, kind))
            .collect::<Vec<_>>()
    });

    // Highlight state while a drag hovers this column
    let (active, set_active) = signal(false);
    let (active_slot, set_active_slot) = signal(None::<DropSlot>);

    // Indicator refs keyed by the card they precede, plus the terminal
    // line. Entries for removed cards go stale harmlessly: anchors are
    // rebuilt from the filtered list on every drag event.
    let anchor_refs: StoredValue<HashMap<String, NodeRef<Div>>> =
        StoredValue::new(HashMap::new());
    let terminal_ref: NodeRef<Div> = NodeRef::new();

    let collect_anchors = move || {
        let mut anchors = Vec::new();
        anchor_refs.with_value(|refs| {
            for card in filtered.get_untracked() {
                if let Some(node) = refs.get(&card.id) {
                    if let Some(top) = anchor_top(node) {
                        anchors.push(DropAnchor { slot: DropSlot::Before(card.id), top });
                    }
                }
            }
        });
        if let Some(top) = anchor_top(&terminal_ref) {
            anchors.push(DropAnchor { slot: DropSlot::End, top });
        }
        anchors
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_active.set(true);
        let anchors = collect_anchors();
        let slot = nearest_anchor(ev.client_y() as f64, DROP_BIAS_PX, &anchors)
            .map(|anchor| anchor.slot.clone());
        set_active_slot.set(slot);
    };

    let on_dragleave = move |_ev: DragEvent| {
        set_active.set(false);
        set_active_slot.set(None);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_active.set(false);
        set_active_slot.set(None);

        let Some(card_id) = drag_payload(&ev) else { return };
        let anchors = collect_anchors();
        let Some(anchor) = nearest_anchor(ev.client_y() as f64, DROP_BIAS_PX, &anchors) else {
            return;
        };
        let slot = anchor.slot.clone();
        store::with_cards(&store, |cards| {
            if let Some(next) = reorder::move_card(cards, &card_id, kind, &slot) {
                web_sys::console::log_1(
                    &format!("[BOARD] moved {} to {}", card_id, kind.key()).into(),
                );
                *cards = next;
            }
        });
    };

    let column_class = move || {
        if active.get() {
            format!("column column-{} active", kind.key())
        } else {
            format!("column column-{}", kind.key())
        }
    };

    view! {
        <div class="column-wrapper">
            <div class="column-header">
                <h3 class=format!("column-title column-title-{}", kind.key())>
                    {move || title.get()}
                    {is_default.then(|| view! { <span class="column-default-tag">"(Default)"</span> })}
                </h3>
                <span class="column-count">{move || filtered.get().len()}</span>
            </div>
            <div
                class=column_class
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <For
                    each=move || filtered.get()
                    key=|card| {
                        // Tuple of the fields the tile renders, so edits
                        // re-render the row. Verbose but guaranteed.
                        (
                            card.id.clone(),
                            card.title.clone(),
                            card.description.clone(),
                            card.priority,
                            card.card_type.clone(),
                            card.column,
                            card.date,
                            card.deadline,
                            card.comments.len(),
                            card.links.len(),
                            card.attachments.len(),
                            (card.checklists.len(), card.checklist_done()),
                        )
                    }
                    children=move |card| {
                        let slot_id = card.id.clone();
                        let node_ref: NodeRef<Div> = NodeRef::new();
                        anchor_refs.update_value(|refs| {
                            refs.insert(slot_id.clone(), node_ref);
                        });
                        let line_active = Signal::derive(move || {
                            active_slot.with(|slot| {
                                matches!(slot, Some(DropSlot::Before(id)) if id == &slot_id)
                            })
                        });

                        view! {
                            <DropLine
                                visible=Signal::derive(move || active.get())
                                active=line_active
                                node_ref=node_ref
                            />
                            <CardTile card=card />
                        }
                    }
                />
                <DropLine
                    visible=Signal::derive(move || active.get())
                    active=Signal::derive(move || {
                        active_slot.with(|slot| matches!(slot, Some(DropSlot::End)))
                    })
                    node_ref=terminal_ref
                />
                <AddCard column=kind is_default=is_default />
            </div>
        </div>
    }
}
