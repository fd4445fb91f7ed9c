//! Board Analytics
//!
//! Aggregations shown in the analytics modal, computed over the active
//! registry. Pure; `today` and `now` come in as parameters.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Card, ColumnKind, Priority};

/// Aggregated board metrics
#[derive(Clone, Debug, PartialEq)]
pub struct BoardStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub backlog: usize,
    /// Completed share of all cards, in percent
    pub completion_rate: f64,
    /// Card count per priority, in Low..High order
    pub priority_counts: Vec<(Priority, usize)>,
    /// Card count per type, sorted by type name
    pub type_counts: Vec<(String, usize)>,
    /// Mean age of completed cards, in days
    pub avg_cycle_days: f64,
    pub overdue: usize,
    pub total_tracked_seconds: u64,
}

impl BoardStats {
    /// Compute the metrics; `None` for an empty registry.
    pub fn compute(cards: &[Card], today: NaiveDate, now: DateTime<Utc>) -> Option<BoardStats> {
        if cards.is_empty() {
            return None;
        }

        let total = cards.len();
        let completed_cards: Vec<&Card> =
            cards.iter().filter(|card| card.column == ColumnKind::Done).collect();
        let completed = completed_cards.len();
        let in_progress = cards.iter().filter(|card| card.column == ColumnKind::Doing).count();
        let backlog = cards.iter().filter(|card| card.column == ColumnKind::Backlog).count();

        let priority_counts = Priority::ALL
            .iter()
            .map(|priority| {
                (*priority, cards.iter().filter(|card| card.priority == *priority).count())
            })
            .collect();

        let mut types: BTreeMap<String, usize> = BTreeMap::new();
        for card in cards {
            *types.entry(card.card_type.clone()).or_default() += 1;
        }
        let type_counts = types.into_iter().collect();

        let avg_cycle_days = if completed_cards.is_empty() {
            0.0
        } else {
            let total_days: f64 = completed_cards
                .iter()
                .map(|card| (now - card.created_at).num_seconds().max(0) as f64 / 86_400.0)
                .sum();
            total_days / completed_cards.len() as f64
        };

        let overdue = cards.iter().filter(|card| card.is_overdue(today)).count();
        let total_tracked_seconds = cards.iter().map(|card| card.timer.total_seconds).sum();

        Some(BoardStats {
            total,
            completed,
            in_progress,
            backlog,
            completion_rate: completed as f64 / total as f64 * 100.0,
            priority_counts,
            type_counts,
            avg_cycle_days,
            overdue,
            total_tracked_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_card(id: &str, column: ColumnKind) -> Card {
        Card::new(id.to_string(), format!("Card {}", id), column, DateTime::UNIX_EPOCH)
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_registry_has_no_stats() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert!(BoardStats::compute(&[], today, fixed_now()).is_none());
    }

    #[test]
    fn counts_and_completion_rate() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let cards = vec![
            make_card("a", ColumnKind::Done),
            make_card("b", ColumnKind::Doing),
            make_card("c", ColumnKind::Backlog),
            make_card("d", ColumnKind::Todo),
        ];
        let stats = BoardStats::compute(&cards, today, fixed_now()).unwrap();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.backlog, 1);
        assert!((stats.completion_rate - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distributions_cover_priorities_and_types() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut a = make_card("a", ColumnKind::Todo);
        a.priority = Priority::High;
        a.card_type = "Backend".to_string();
        let mut b = make_card("b", ColumnKind::Todo);
        b.priority = Priority::High;
        b.card_type = "Research".to_string();

        let stats = BoardStats::compute(&[a, b], today, fixed_now()).unwrap();
        assert_eq!(
            stats.priority_counts,
            vec![(Priority::Low, 0), (Priority::Medium, 0), (Priority::High, 2)]
        );
        assert_eq!(
            stats.type_counts,
            vec![("Backend".to_string(), 1), ("Research".to_string(), 1)]
        );
    }

    #[test]
    fn cycle_time_averages_completed_cards_only() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let now = fixed_now();
        let mut done = make_card("a", ColumnKind::Done);
        done.created_at = now - chrono::Duration::days(4);
        let mut open = make_card("b", ColumnKind::Todo);
        open.created_at = now - chrono::Duration::days(100);

        let stats = BoardStats::compute(&[done, open], today, now).unwrap();
        assert!((stats.avg_cycle_days - 4.0).abs() < 1e-9);
    }

    #[test]
    fn overdue_and_tracked_time_roll_up() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut a = make_card("a", ColumnKind::Todo);
        a.deadline = NaiveDate::from_ymd_opt(2024, 6, 1);
        a.timer.total_seconds = 120;
        let mut b = make_card("b", ColumnKind::Done);
        b.deadline = NaiveDate::from_ymd_opt(2024, 6, 1);
        b.timer.total_seconds = 30;

        let stats = BoardStats::compute(&[a, b], today, fixed_now()).unwrap();
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.total_tracked_seconds, 150);
    }
}
