// tempo-core: Domain layer between tempo-api and consumers (the CLI).

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod notice;
pub mod session;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{AuthCredentials, ClientConfig};
pub use error::CoreError;
pub use notice::{Notice, NoticeLevel, NoticeSender};
pub use session::{Session, TimerSlot};
pub use store::{
    ClientStore, Identified, MemberStore, OrgStore, PagedList, ProjectStore, TaskStore, TimeStore,
};

// Re-export the wire request/query types consumers build directly.
pub use tempo_api::types::{
    DateFilter, ListScope, PageInfo, PageQuery, ProjectDraft, TaskDraft, TaskPatch, TimeEntryDraft,
    TimeEntryUpdates, TimerStart,
};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Client, EntityId, Invitation, Member, Organization, Project, ProjectMember, ProjectWithTasks,
    Tag, Task, TaskStatus, TimeEntry, User,
};
