use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::EntityId;

/// Task lifecycle status -- the only enumerated domain type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Active,
    Done,
}

impl TaskStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Done,
            Self::Done => Self::Active,
        }
    }
}

/// A task belonging to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub name: String,
    pub status: TaskStatus,
    /// Hours logged against this task.
    pub spent_time: Option<f64>,
    pub estimated_time: Option<f64>,
    pub project_id: EntityId,
}

impl Task {
    pub fn progress_percent(&self) -> u32 {
        progress_percent(self.spent_time, self.estimated_time)
    }
}

/// Progress of spent time against the estimate, as a whole percentage.
///
/// Returns 0 when either input is missing or zero. The result is
/// deliberately uncapped -- display layers clamp the rendered bar at
/// 100, but the number itself can exceed it.
pub fn progress_percent(spent: Option<f64>, estimated: Option<f64>) -> u32 {
    let (Some(spent), Some(estimated)) = (spent, estimated) else {
        return 0;
    };
    if spent == 0.0 || estimated == 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (spent / estimated * 100.0).round() as u32
    }
}

/// Split a task list into the (active, done) tab partitions.
pub fn partition_by_status(tasks: &[Task]) -> (Vec<&Task>, Vec<&Task>) {
    tasks
        .iter()
        .partition(|task| task.status == TaskStatus::Active)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_for_missing_inputs() {
        assert_eq!(progress_percent(None, Some(10.0)), 0);
        assert_eq!(progress_percent(Some(5.0), None), 0);
        assert_eq!(progress_percent(Some(0.0), Some(10.0)), 0);
        assert_eq!(progress_percent(Some(5.0), Some(0.0)), 0);
    }

    #[test]
    fn progress_rounds_to_whole_percent() {
        assert_eq!(progress_percent(Some(1.0), Some(3.0)), 33);
        assert_eq!(progress_percent(Some(2.0), Some(3.0)), 67);
        assert_eq!(progress_percent(Some(5.0), Some(10.0)), 50);
    }

    #[test]
    fn progress_is_uncapped_past_estimate() {
        assert_eq!(progress_percent(Some(15.0), Some(10.0)), 150);
    }

    #[test]
    fn status_round_trips_wire_casing() {
        let status: TaskStatus = serde_json::from_str("\"ACTIVE\"").expect("parse");
        assert_eq!(status, TaskStatus::Active);
        assert_eq!(TaskStatus::Done.to_string(), "DONE");
    }

    #[test]
    fn toggled_flips_status() {
        assert_eq!(TaskStatus::Active.toggled(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.toggled(), TaskStatus::Active);
    }
}
