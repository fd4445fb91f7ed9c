//! Column Visibility Predicate
//!
//! Decides which cards a column shows under the current search and
//! filter selections. Pure; re-evaluated on every render.

use crate::models::{Card, ColumnKind, Priority};

/// The active search/filter selections
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardFilter {
    pub query: String,
    /// None means "All"
    pub priority: Option<Priority>,
    /// None means "All"
    pub card_type: Option<String>,
}

impl CardFilter {
    /// A card is visible in `column` iff it lives there and passes every
    /// active filter. The search matches title, description, type or
    /// priority label, case-insensitively.
    pub fn matches(&self, card: &Card, column: ColumnKind) -> bool {
        if card.column != column {
            return false;
        }

        let query = self.query.trim().to_lowercase();
        if !query.is_empty() {
            let hit = card.title.to_lowercase().contains(&query)
                || card.description.to_lowercase().contains(&query)
                || card.card_type.to_lowercase().contains(&query)
                || card.priority.label().to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if card.priority != priority {
                return false;
            }
        }

        if let Some(card_type) = &self.card_type {
            if &card.card_type != card_type {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use crate::models::Card;

    fn make_card(id: &str, title: &str, column: ColumnKind) -> Card {
        Card::new(id.to_string(), title.to_string(), column, DateTime::UNIX_EPOCH)
    }

    #[test]
    fn column_mismatch_hides_card() {
        let card = make_card("card-1", "Ship release", ColumnKind::Todo);
        let filter = CardFilter::default();
        assert!(filter.matches(&card, ColumnKind::Todo));
        assert!(!filter.matches(&card, ColumnKind::Doing));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let mut card = make_card("card-1", "Ship release", ColumnKind::Todo);
        card.description = "Cut the v2 branch".to_string();
        card.card_type = "Backend".to_string();

        for query in ["SHIP", "v2 BRANCH", "backend", "low"] {
            let filter = CardFilter { query: query.to_string(), ..Default::default() };
            assert!(filter.matches(&card, ColumnKind::Todo), "query {:?}", query);
        }

        let filter = CardFilter { query: "frontend".to_string(), ..Default::default() };
        assert!(!filter.matches(&card, ColumnKind::Todo));
    }

    #[test]
    fn priority_and_type_filters_are_exact() {
        let mut card = make_card("card-1", "Ship release", ColumnKind::Todo);
        card.priority = Priority::High;
        card.card_type = "Research".to_string();

        let filter = CardFilter { priority: Some(Priority::High), ..Default::default() };
        assert!(filter.matches(&card, ColumnKind::Todo));

        let filter = CardFilter { priority: Some(Priority::Low), ..Default::default() };
        assert!(!filter.matches(&card, ColumnKind::Todo));

        let filter = CardFilter { card_type: Some("Research".to_string()), ..Default::default() };
        assert!(filter.matches(&card, ColumnKind::Todo));

        let filter = CardFilter { card_type: Some("Backend".to_string()), ..Default::default() };
        assert!(!filter.matches(&card, ColumnKind::Todo));
    }

    #[test]
    fn filters_conjoin_independent_of_order() {
        let mut card = make_card("card-1", "Audit logging", ColumnKind::Doing);
        card.priority = Priority::Medium;
        card.card_type = "Backend".to_string();

        // All three filters active; the predicate is a plain conjunction,
        // so any evaluation order yields the same visible set.
        let full = CardFilter {
            query: "audit".to_string(),
            priority: Some(Priority::Medium),
            card_type: Some("Backend".to_string()),
        };
        let search_only = CardFilter { query: "audit".to_string(), ..Default::default() };
        let priority_only = CardFilter { priority: Some(Priority::Medium), ..Default::default() };
        let type_only = CardFilter { card_type: Some("Backend".to_string()), ..Default::default() };

        let conjunction = search_only.matches(&card, ColumnKind::Doing)
            && priority_only.matches(&card, ColumnKind::Doing)
            && type_only.matches(&card, ColumnKind::Doing);
        assert_eq!(full.matches(&card, ColumnKind::Doing), conjunction);
    }

    #[test]
    fn blank_query_passes_everything_through() {
        let card = make_card("card-1", "Anything", ColumnKind::Backlog);
        let filter = CardFilter { query: "   ".to_string(), ..Default::default() };
        assert!(filter.matches(&card, ColumnKind::Backlog));
    }
}
