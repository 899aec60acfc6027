use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;

/// A user's membership in an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub billable_rate: Option<f64>,
    pub is_active: bool,
}

/// An outstanding invitation to join an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: EntityId,
    pub email: String,
    pub role: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// A member's assignment to a specific project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub id: EntityId,
    pub member_id: EntityId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub billable_rate: Option<f64>,
}
