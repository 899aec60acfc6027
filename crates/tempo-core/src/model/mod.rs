//! Domain entities mirrored from server state.

mod client;
mod entity_id;
mod member;
mod organization;
mod project;
mod tag;
mod task;
mod time_entry;
mod user;

pub use client::Client;
pub use entity_id::EntityId;
pub use member::{Invitation, Member, ProjectMember};
pub use organization::{Organization, ProjectWithTasks};
pub use project::Project;
pub use tag::Tag;
pub use task::{partition_by_status, progress_percent, Task, TaskStatus};
pub use time_entry::TimeEntry;
pub use user::User;
