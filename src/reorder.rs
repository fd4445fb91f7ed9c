//! Registry Reordering
//!
//! Commit logic for a drag gesture: rebuild the card registry with the
//! dragged card moved to its resolved drop slot. Cross-column moves and
//! same-column reorders share this one path.

use leptos_dropline::DropSlot;

use crate::models::{Card, ColumnKind};

/// Rebuild the registry with `card_id` moved to `slot` in `dest`.
///
/// Returns `None` when nothing should change: unknown card id (stale drag
/// payload), a slot anchored on the dragged card itself, a `Before` target
/// that is no longer in the registry, or a rebuild that reproduces the
/// current order. The caller commits the returned vector wholesale.
pub fn move_card(
    cards: &[Card],
    card_id: &str,
    dest: ColumnKind,
    slot: &DropSlot,
) -> Option<Vec<Card>> {
    if let DropSlot::Before(target) = slot {
        if target == card_id {
            return None;
        }
    }

    let mut moved = cards.iter().find(|card| card.id == card_id)?.clone();
    moved.column = dest;

    let mut rebuilt: Vec<Card> = cards
        .iter()
        .filter(|card| card.id != card_id)
        .cloned()
        .collect();
    match slot {
        DropSlot::End => rebuilt.push(moved),
        DropSlot::Before(target) => {
            let at = rebuilt.iter().position(|card| &card.id == target)?;
            rebuilt.insert(at, moved);
        }
    }

    let unchanged = rebuilt
        .iter()
        .zip(cards.iter())
        .all(|(a, b)| a.id == b.id && a.column == b.column);
    if unchanged {
        None
    } else {
        Some(rebuilt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn make_card(id: &str, column: ColumnKind) -> Card {
        Card::new(id.to_string(), format!("Card {}", id), column, DateTime::UNIX_EPOCH)
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|card| card.id.as_str()).collect()
    }

    #[test]
    fn cross_column_append() {
        // [A(todo), B(todo), C(doing)]; drag A to the end of doing.
        let cards = vec![
            make_card("a", ColumnKind::Todo),
            make_card("b", ColumnKind::Todo),
            make_card("c", ColumnKind::Doing),
        ];
        let next = move_card(&cards, "a", ColumnKind::Doing, &DropSlot::End).unwrap();

        assert_eq!(ids(&next), vec!["b", "c", "a"]);
        let doing: Vec<&str> = next
            .iter()
            .filter(|card| card.column == ColumnKind::Doing)
            .map(|card| card.id.as_str())
            .collect();
        assert_eq!(doing, vec!["c", "a"]);
        assert_eq!(next.iter().filter(|card| card.id == "a").count(), 1);
    }

    #[test]
    fn insert_before_target() {
        let cards = vec![
            make_card("a", ColumnKind::Todo),
            make_card("b", ColumnKind::Todo),
            make_card("c", ColumnKind::Todo),
        ];
        let next = move_card(&cards, "c", ColumnKind::Todo, &DropSlot::Before("a".into())).unwrap();
        assert_eq!(ids(&next), vec!["c", "a", "b"]);
    }

    #[test]
    fn drop_on_own_anchor_is_a_noop() {
        let cards = vec![make_card("a", ColumnKind::Todo), make_card("b", ColumnKind::Todo)];
        assert!(move_card(&cards, "a", ColumnKind::Todo, &DropSlot::Before("a".into())).is_none());
    }

    #[test]
    fn drop_on_successor_anchor_keeps_order() {
        let cards = vec![
            make_card("a", ColumnKind::Todo),
            make_card("b", ColumnKind::Todo),
            make_card("c", ColumnKind::Todo),
        ];
        // Inserting a before its own successor reproduces the current order.
        assert!(move_card(&cards, "a", ColumnKind::Todo, &DropSlot::Before("b".into())).is_none());
    }

    #[test]
    fn stale_drag_payload_is_a_noop() {
        let cards = vec![make_card("a", ColumnKind::Todo)];
        assert!(move_card(&cards, "ghost", ColumnKind::Doing, &DropSlot::End).is_none());
    }

    #[test]
    fn missing_before_target_never_loses_the_card() {
        let cards = vec![make_card("a", ColumnKind::Todo), make_card("b", ColumnKind::Todo)];
        assert!(move_card(&cards, "a", ColumnKind::Doing, &DropSlot::Before("ghost".into())).is_none());
    }

    #[test]
    fn cross_column_move_updates_the_column_field() {
        let cards = vec![make_card("a", ColumnKind::Backlog), make_card("b", ColumnKind::Done)];
        let next = move_card(&cards, "a", ColumnKind::Done, &DropSlot::Before("b".into())).unwrap();
        assert_eq!(next[0].id, "a");
        assert_eq!(next[0].column, ColumnKind::Done);
    }

    #[test]
    fn same_position_cross_column_still_commits_the_column_change() {
        // a stays at index 0 but its column changes; that is a real commit.
        let cards = vec![make_card("a", ColumnKind::Todo)];
        let next = move_card(&cards, "a", ColumnKind::Doing, &DropSlot::End).unwrap();
        assert_eq!(next[0].column, ColumnKind::Doing);
    }
}
