use serde::{Deserialize, Serialize};

use super::{EntityId, Task};

/// A tenant. Every resource lives under exactly one organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: EntityId,
    pub name: String,
}

/// A project with its tasks inlined, as offered by the timer pickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWithTasks {
    pub id: EntityId,
    pub name: String,
    pub color: Option<String>,
    pub tasks: Vec<Task>,
}
