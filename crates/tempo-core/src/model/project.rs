use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;

/// A project within an organization.
///
/// Entities are plain records mirrored from server responses; every
/// mutation replaces the record wholesale with the confirmed copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub color: Option<String>,
    pub billable: bool,
    pub billable_rate: Option<f64>,
    /// Estimated effort in hours.
    pub estimated_time: Option<f64>,
    pub client_id: Option<EntityId>,
    /// Set when the project is archived; `None` while active.
    pub archived_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}
