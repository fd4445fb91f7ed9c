//! Derived Column Transitions
//!
//! Two pure rules that move cards between columns outside of drags: the
//! checklist auto-completion transition and the overdue sweep.

use chrono::NaiveDate;

use crate::models::{Card, ColumnKind};

/// Column a card should be in after a checklist mutation.
///
/// A non-empty, fully checked checklist pins the card to Done. There is
/// no inverse: unchecking an item never moves a Done card back.
pub fn derive_column(card: &Card) -> ColumnKind {
    let complete = !card.checklists.is_empty() && card.checklists.iter().all(|item| item.checked);
    if complete && card.column != ColumnKind::Done {
        ColumnKind::Done
    } else {
        card.column
    }
}

/// Move overdue cards to the backlog.
///
/// A card is overdue when its deadline is strictly before `today` and it
/// sits in neither Backlog nor Done. Returns `None` when nothing is
/// overdue, so re-running the sweep is an idempotent no-op.
pub fn sweep_overdue(cards: &[Card], today: NaiveDate) -> Option<Vec<Card>> {
    let mut changed = false;
    let swept: Vec<Card> = cards
        .iter()
        .map(|card| {
            let overdue = matches!(card.deadline, Some(deadline) if deadline < today);
            if overdue && card.column != ColumnKind::Backlog && card.column != ColumnKind::Done {
                changed = true;
                let mut moved = card.clone();
                moved.column = ColumnKind::Backlog;
                moved
            } else {
                card.clone()
            }
        })
        .collect();
    changed.then_some(swept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use crate::models::ChecklistItem;

    fn make_card(id: &str, column: ColumnKind) -> Card {
        Card::new(id.to_string(), format!("Card {}", id), column, DateTime::UNIX_EPOCH)
    }

    fn item(id: &str, checked: bool) -> ChecklistItem {
        ChecklistItem { id: id.to_string(), text: id.to_string(), checked }
    }

    #[test]
    fn complete_checklist_derives_done() {
        let mut card = make_card("a", ColumnKind::Doing);
        card.checklists = vec![item("1", true), item("2", true)];
        assert_eq!(derive_column(&card), ColumnKind::Done);
    }

    #[test]
    fn incomplete_checklist_keeps_current_column() {
        let mut card = make_card("a", ColumnKind::Doing);
        card.checklists = vec![item("1", true), item("2", false)];
        assert_eq!(derive_column(&card), ColumnKind::Doing);
    }

    #[test]
    fn empty_checklist_never_transitions() {
        let card = make_card("a", ColumnKind::Todo);
        assert_eq!(derive_column(&card), ColumnKind::Todo);
    }

    #[test]
    fn unchecking_does_not_leave_done() {
        let mut card = make_card("a", ColumnKind::Done);
        card.checklists = vec![item("1", true), item("2", false)];
        assert_eq!(derive_column(&card), ColumnKind::Done);
    }

    #[test]
    fn sweep_moves_overdue_open_cards_to_backlog() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let deadline = NaiveDate::from_ymd_opt(2024, 6, 1);

        let mut todo = make_card("a", ColumnKind::Todo);
        todo.deadline = deadline;
        let mut done = make_card("b", ColumnKind::Done);
        done.deadline = deadline;

        let swept = sweep_overdue(&[todo, done], today).unwrap();
        assert_eq!(swept[0].column, ColumnKind::Backlog);
        assert_eq!(swept[1].column, ColumnKind::Done);
    }

    #[test]
    fn sweep_without_overdue_cards_is_a_noop() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut card = make_card("a", ColumnKind::Todo);
        card.deadline = NaiveDate::from_ymd_opt(2024, 6, 20);
        assert!(sweep_overdue(&[card, make_card("b", ColumnKind::Doing)], today).is_none());
    }

    #[test]
    fn sweep_is_idempotent() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut card = make_card("a", ColumnKind::Doing);
        card.deadline = NaiveDate::from_ymd_opt(2024, 6, 1);

        let first = sweep_overdue(&[card], today).unwrap();
        assert!(sweep_overdue(&first, today).is_none());
    }

    #[test]
    fn deadline_today_is_not_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut card = make_card("a", ColumnKind::Todo);
        card.deadline = Some(today);
        assert!(sweep_overdue(&[card], today).is_none());
    }
}
