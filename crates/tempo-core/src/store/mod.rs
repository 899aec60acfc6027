//! Per-domain state stores.
//!
//! Each store owns the lists it mirrors plus their pagination
//! bookkeeping, and follows one action shape: busy flag on, API call,
//! fold the confirmed entity into local state, one notice, flag off.

mod clients;
mod members;
mod org;
mod paged;
mod projects;
mod tasks;
mod time;

pub use clients::ClientStore;
pub use members::MemberStore;
pub use org::OrgStore;
pub use paged::{Identified, PagedList};
pub use projects::ProjectStore;
pub use tasks::TaskStore;
pub use time::TimeStore;
