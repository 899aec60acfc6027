use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Tag};

/// A tracked block of time.
///
/// A "timer" is just an entry whose `end` is still `None`; at most one
/// such entry exists per organization session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: EntityId,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    /// `None` while the timer is running.
    pub end: Option<DateTime<Utc>>,
    pub billable: bool,
    pub project_id: Option<EntityId>,
    pub task_id: Option<EntityId>,
    pub client_id: Option<EntityId>,
    pub tags: Vec<Tag>,
}

impl TimeEntry {
    pub fn is_running(&self) -> bool {
        self.end.is_none()
    }

    /// Elapsed duration; `None` while still running.
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.end.map(|end| end - self.start)
    }

    /// Whether the entry's start falls on the given calendar day (UTC).
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start.date_naive() == date
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(start: &str, end: Option<&str>) -> TimeEntry {
        TimeEntry {
            id: EntityId::from("e1"),
            description: None,
            start: start.parse().unwrap(),
            end: end.map(|e| e.parse().unwrap()),
            billable: false,
            project_id: None,
            task_id: None,
            client_id: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn entry_without_end_is_running() {
        assert!(entry("2026-03-01T09:00:00Z", None).is_running());
        assert!(!entry("2026-03-01T09:00:00Z", Some("2026-03-01T10:00:00Z")).is_running());
    }

    #[test]
    fn duration_requires_an_end() {
        let done = entry("2026-03-01T09:00:00Z", Some("2026-03-01T10:30:00Z"));
        assert_eq!(done.duration().unwrap().num_minutes(), 90);
        assert!(entry("2026-03-01T09:00:00Z", None).duration().is_none());
    }

    #[test]
    fn starts_on_compares_calendar_day() {
        let e = entry("2026-03-01T23:59:00Z", None);
        assert!(e.starts_on("2026-03-01".parse().unwrap()));
        assert!(!e.starts_on("2026-03-02".parse().unwrap()));
    }
}
