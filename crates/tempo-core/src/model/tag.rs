use serde::{Deserialize, Serialize};

use super::EntityId;

/// A label attachable to time entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: EntityId,
    pub name: String,
}
