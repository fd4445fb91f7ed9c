//! Frontend Models
//!
//! Card, project and workspace data structures owned by the store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Suggested card types offered in selectors; free text is also allowed
pub const CARD_TYPES: &[&str] = &["Front-End", "UI/UX", "Daily Routine", "Backend", "Research"];

/// Card priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Priority> {
        Priority::ALL.iter().copied().find(|p| p.label() == label)
    }
}

/// The four fixed board columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Backlog,
    Todo,
    Doing,
    Done,
}

impl ColumnKind {
    pub const ALL: [ColumnKind; 4] = [
        ColumnKind::Backlog,
        ColumnKind::Todo,
        ColumnKind::Doing,
        ColumnKind::Done,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ColumnKind::Backlog => "backlog",
            ColumnKind::Todo => "todo",
            ColumnKind::Doing => "doing",
            ColumnKind::Done => "done",
        }
    }
}

/// Per-project display titles for the four columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnTitles {
    pub backlog: String,
    pub todo: String,
    pub doing: String,
    pub done: String,
}

impl Default for ColumnTitles {
    fn default() -> Self {
        Self {
            backlog: "Backlog".to_string(),
            todo: "TODO".to_string(),
            doing: "In Progress".to_string(),
            done: "Completed".to_string(),
        }
    }
}

impl ColumnTitles {
    pub fn for_column(&self, kind: ColumnKind) -> &str {
        match kind {
            ColumnKind::Backlog => &self.backlog,
            ColumnKind::Todo => &self.todo,
            ColumnKind::Doing => &self.doing,
            ColumnKind::Done => &self.done,
        }
    }
}

/// A comment on a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: String,
    pub posted_at: DateTime<Utc>,
}

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

/// Elapsed-time tracking for a card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub is_running: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub total_seconds: u64,
}

impl TimerState {
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.is_running = true;
        self.started_at = Some(now);
    }

    pub fn pause(&mut self) {
        self.is_running = false;
        self.started_at = None;
    }

    pub fn tick(&mut self) {
        self.total_seconds += 1;
    }

    pub fn reset(&mut self) {
        *self = TimerState::default();
    }

    /// Pomodoro session number: one session per 25 minutes of tracked time
    pub fn session(&self) -> u64 {
        self.total_seconds / 1500 + 1
    }
}

/// An uploaded file held in memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub uploaded_on: NaiveDate,
    pub comments: Vec<String>,
    pub data: Vec<u8>,
}

/// A single task card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub card_type: String,
    pub column: ColumnKind,
    pub date: NaiveDate,
    pub deadline: Option<NaiveDate>,
    pub comments: Vec<Comment>,
    pub links: Vec<String>,
    pub attachments: Vec<Attachment>,
    pub assignees: Vec<String>,
    pub timer: TimerState,
    pub checklists: Vec<ChecklistItem>,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// New card with default field values
    pub fn new(id: String, title: String, column: ColumnKind, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            priority: Priority::Low,
            card_type: "Front-End".to_string(),
            column,
            date: now.date_naive(),
            deadline: None,
            comments: Vec::new(),
            links: Vec::new(),
            attachments: Vec::new(),
            assignees: Vec::new(),
            timer: TimerState::default(),
            checklists: Vec::new(),
            created_at: now,
        }
    }

    pub fn checklist_done(&self) -> usize {
        self.checklists.iter().filter(|item| item.checked).count()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.column != ColumnKind::Done && matches!(self.deadline, Some(deadline) if deadline < today)
    }
}

/// A project: its card registry plus board metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub favorite: bool,
    pub cover_color: String,
    pub column_titles: ColumnTitles,
    pub cards: Vec<Card>,
}

/// A workspace record persisted to browser local storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceRecord {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_ticks_accumulate_and_pause_keeps_total() {
        let mut timer = TimerState::default();
        timer.start(DateTime::UNIX_EPOCH);
        assert!(timer.is_running);
        timer.tick();
        timer.tick();
        timer.tick();
        timer.pause();
        assert_eq!(timer.total_seconds, 3);
        assert!(!timer.is_running);
        assert!(timer.started_at.is_none());
    }

    #[test]
    fn timer_reset_zeroes_everything() {
        let mut timer = TimerState::default();
        timer.start(DateTime::UNIX_EPOCH);
        timer.tick();
        timer.reset();
        assert_eq!(timer, TimerState::default());
    }

    #[test]
    fn session_number_advances_every_25_minutes() {
        let mut timer = TimerState::default();
        assert_eq!(timer.session(), 1);
        timer.total_seconds = 1499;
        assert_eq!(timer.session(), 1);
        timer.total_seconds = 1500;
        assert_eq!(timer.session(), 2);
    }

    #[test]
    fn priority_labels_round_trip() {
        for priority in Priority::ALL {
            assert_eq!(Priority::from_label(priority.label()), Some(priority));
        }
        assert_eq!(Priority::from_label("Urgent"), None);
    }

    #[test]
    fn overdue_ignores_done_cards() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut card = Card::new("card-1".into(), "A".into(), ColumnKind::Todo, DateTime::UNIX_EPOCH);
        card.deadline = NaiveDate::from_ymd_opt(2024, 6, 1);
        assert!(card.is_overdue(today));
        card.column = ColumnKind::Done;
        assert!(!card.is_overdue(today));
    }

    #[test]
    fn checklist_done_counts_checked_items() {
        let mut card = Card::new("card-1".into(), "A".into(), ColumnKind::Todo, DateTime::UNIX_EPOCH);
        card.checklists = vec![
            ChecklistItem { id: "c-1".into(), text: "one".into(), checked: true },
            ChecklistItem { id: "c-2".into(), text: "two".into(), checked: false },
        ];
        assert_eq!(card.checklist_done(), 1);
    }
}
