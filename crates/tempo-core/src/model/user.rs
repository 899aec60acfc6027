use serde::{Deserialize, Serialize};

use super::EntityId;

/// The authenticated account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    /// Organization the account is currently operating in.
    pub current_organization_id: Option<EntityId>,
}
