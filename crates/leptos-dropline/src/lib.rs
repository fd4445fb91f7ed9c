//! Leptos DropLine Utilities
//!
//! Anchor-based drag-and-drop for Leptos using native drag events.
//! The drop position is chosen by a nearest-anchor rule over geometry
//! supplied by the caller, never by querying the DOM from here.

use leptos::html::Div;
use leptos::prelude::*;
use web_sys::DragEvent;

/// Drag payload format key used on the native DataTransfer.
pub const DRAG_PAYLOAD_KEY: &str = "cardid";

/// A drop position: before a specific item, or at the end of the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropSlot {
    /// Insert before the item with this id
    Before(String),
    /// Append at the end of the list
    End,
}

/// A drop anchor with its measured vertical position.
///
/// The presentation layer measures each rendered indicator and hands the
/// resulting list to [`nearest_anchor`]; the selection itself is pure.
#[derive(Clone, Debug, PartialEq)]
pub struct DropAnchor {
    pub slot: DropSlot,
    /// Top edge of the indicator, in the same coordinate space as the pointer
    pub top: f64,
}

/// Select the anchor nearest above the biased pointer line.
///
/// For each anchor the delta is `pointer_y - (top + bias)`. Among anchors
/// with a negative delta (pointer above the bias line) the one closest to
/// zero wins. If the pointer is below every bias line, the last anchor
/// (the terminal one) is selected. Returns `None` only for an empty slice.
pub fn nearest_anchor(pointer_y: f64, bias: f64, anchors: &[DropAnchor]) -> Option<&DropAnchor> {
    let mut closest: Option<(&DropAnchor, f64)> = None;
    for anchor in anchors {
        let delta = pointer_y - (anchor.top + bias);
        if delta < 0.0 {
            let replace = match closest {
                Some((_, best)) => delta > best,
                None => true,
            };
            if replace {
                closest = Some((anchor, delta));
            }
        }
    }
    closest.map(|(anchor, _)| anchor).or_else(|| anchors.last())
}

/// Stash the dragged item's id in the native drag payload.
pub fn set_drag_payload(ev: &DragEvent, id: &str) {
    if let Some(dt) = ev.data_transfer() {
        let _ = dt.set_data(DRAG_PAYLOAD_KEY, id);
    }
}

/// Read the dragged item's id back out of the drag payload.
///
/// Returns `None` for a missing or empty payload (stale drops resolve to
/// no-ops at the caller).
pub fn drag_payload(ev: &DragEvent) -> Option<String> {
    let dt = ev.data_transfer()?;
    let id = dt.get_data(DRAG_PAYLOAD_KEY).ok()?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Measure the top edge of a rendered indicator.
pub fn anchor_top(node: &NodeRef<Div>) -> Option<f64> {
    node.get().map(|el| el.get_bounding_client_rect().top())
}

/// Drop indicator line shown between items.
///
/// Invisible until a drag is in flight; lights up when it is the nearest
/// anchor. The `node_ref` lets the hosting list measure it.
#[component]
pub fn DropLine(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] active: Signal<bool>,
    node_ref: NodeRef<Div>,
) -> impl IntoView {
    let line_class = move || {
        let mut c = String::from("drop-line");
        if !visible.get() {
            c.push_str(" hidden");
        }
        if active.get() {
            c.push_str(" active");
        }
        c
    };

    view! { <div class=line_class node_ref=node_ref></div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors(tops: &[f64]) -> Vec<DropAnchor> {
        let mut list: Vec<DropAnchor> = tops
            .iter()
            .enumerate()
            .map(|(i, top)| DropAnchor {
                slot: DropSlot::Before(format!("card-{}", i)),
                top: *top,
            })
            .collect();
        list.push(DropAnchor {
            slot: DropSlot::End,
            top: tops.last().copied().unwrap_or(0.0) + 100.0,
        });
        list
    }

    #[test]
    fn picks_nearest_anchor_above_pointer() {
        let list = anchors(&[0.0, 100.0, 200.0]);
        // Pointer at 120: anchors at 100 and 200 have bias lines 150 and 250,
        // both below the pointer line; 150 is nearest.
        let hit = nearest_anchor(120.0, 50.0, &list).unwrap();
        assert_eq!(hit.slot, DropSlot::Before("card-1".into()));
    }

    #[test]
    fn bias_shifts_the_split_point() {
        let list = anchors(&[0.0, 100.0]);
        // Without bias the pointer at 110 has already passed the anchor at
        // 100; with the 50px bias it still targets that slot.
        let hit = nearest_anchor(110.0, 50.0, &list).unwrap();
        assert_eq!(hit.slot, DropSlot::Before("card-1".into()));
        let hit = nearest_anchor(110.0, 0.0, &list).unwrap();
        assert_eq!(hit.slot, DropSlot::End);
    }

    #[test]
    fn falls_back_to_terminal_anchor_below_all() {
        let list = anchors(&[0.0, 100.0, 200.0]);
        let hit = nearest_anchor(900.0, 50.0, &list).unwrap();
        assert_eq!(hit.slot, DropSlot::End);
    }

    #[test]
    fn empty_anchor_set_yields_none() {
        assert!(nearest_anchor(10.0, 50.0, &[]).is_none());
    }

    #[test]
    fn pointer_above_everything_targets_first_slot() {
        let list = anchors(&[40.0, 140.0]);
        let hit = nearest_anchor(0.0, 50.0, &list).unwrap();
        assert_eq!(hit.slot, DropSlot::Before("card-0".into()));
    }

    #[test]
    fn payload_key_is_stable() {
        assert_eq!(DRAG_PAYLOAD_KEY, "cardid");
    }
}
