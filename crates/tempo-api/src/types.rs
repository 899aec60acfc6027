// Wire types for the Tempo REST API.
//
// Field names are camelCase on the wire. Mutation responses wrap the
// affected entity in a resource-specific envelope (`project`, `data`,
// `timer`, ...); list responses carry a payload plus a `pagination`
// descriptor. Envelope structs stay crate-private -- resource methods
// unwrap them and hand callers the inner payload.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ── Pagination descriptor ───────────────────────────────────────────

/// Pagination metadata returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Query parameters accepted by paginated list endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    /// Render as `page`/`pageSize` query pairs.
    pub(crate) fn to_params(self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            params.push(("pageSize", size.to_string()));
        }
        params
    }

    /// Render as `page`/`limit` query pairs (time-entry endpoints).
    pub(crate) fn to_limit_params(self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            params.push(("limit", size.to_string()));
        }
        params
    }
}

/// Scope selector for archivable list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    Active,
    Archived,
}

impl ListScope {
    pub(crate) fn as_param(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

// ── Entities ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub billable_rate: Option<f64>,
    #[serde(default)]
    pub estimated_time: Option<f64>,
    #[serde(default)]
    pub client_id: Option<String>,
    /// Null while the project is active.
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub spent_time: Option<f64>,
    #[serde(default)]
    pub estimated_time: Option<f64>,
    pub project_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryDto {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    /// Null while the timer is running.
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<TagDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub archived_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub current_organization_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub billable_rate: Option<f64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationDto {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberDto {
    pub id: String,
    pub member_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub billable_rate: Option<f64>,
}

/// Project with its tasks inlined, for the time-entry pickers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithTasksDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub tasks: Vec<TaskDto>,
}

// ── Request bodies ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// Serialized even when null -- the backend clears the rate on null.
    pub billable_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<f64>,
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    pub billable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
}

/// Shared field updates applied by the bulk-update endpoint.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    pub billable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
}

/// Date filter for the time-entry list (calendar day, not a range).
#[derive(Debug, Clone, Copy)]
pub struct DateFilter(pub NaiveDate);

impl DateFilter {
    pub(crate) fn as_param(self) -> (&'static str, String) {
        ("date", self.0.format("%Y-%m-%d").to_string())
    }
}

// ── Envelopes (crate-private) ───────────────────────────────────────

#[derive(Deserialize)]
pub(crate) struct ProjectEnvelope {
    pub project: ProjectDto,
}

#[derive(Deserialize)]
pub(crate) struct ProjectListEnvelope {
    #[serde(default)]
    pub projects: Vec<ProjectDto>,
    pub pagination: Option<PageInfo>,
}

#[derive(Deserialize)]
pub(crate) struct ClientEnvelope {
    pub client: ClientDto,
}

#[derive(Deserialize)]
pub(crate) struct ClientListEnvelope {
    #[serde(default)]
    pub clients: Vec<ClientDto>,
    pub pagination: Option<PageInfo>,
}

#[derive(Deserialize)]
pub(crate) struct TaskEnvelope {
    pub task: TaskDto,
}

#[derive(Deserialize)]
pub(crate) struct TaskListEnvelope {
    #[serde(default)]
    pub tasks: Vec<TaskDto>,
}

#[derive(Deserialize)]
pub(crate) struct TagListEnvelope {
    #[serde(default)]
    pub tags: Vec<TagDto>,
}

/// Generic `{"data": ...}` envelope used by the time-entry endpoints.
#[derive(Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Deserialize)]
pub(crate) struct PagedDataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    pub pagination: Option<PageInfo>,
}

/// `{"timer": ...}` -- null when no timer is running.
#[derive(Deserialize)]
pub(crate) struct TimerEnvelope {
    pub timer: Option<TimeEntryDto>,
}

#[derive(Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: UserDto,
}

#[derive(Deserialize)]
pub(crate) struct OrganizationEnvelope {
    pub organization: OrganizationDto,
}

#[derive(Deserialize)]
pub(crate) struct MemberEnvelope {
    pub member: MemberDto,
}

#[derive(Deserialize)]
pub(crate) struct MemberListEnvelope {
    #[serde(default)]
    pub members: Vec<MemberDto>,
    pub pagination: Option<PageInfo>,
}

#[derive(Deserialize)]
pub(crate) struct InvitationEnvelope {
    pub invitation: InvitationDto,
}

#[derive(Deserialize)]
pub(crate) struct InvitationListEnvelope {
    #[serde(default)]
    pub invitations: Vec<InvitationDto>,
    pub pagination: Option<PageInfo>,
}

#[derive(Deserialize)]
pub(crate) struct ProjectMemberEnvelope {
    pub member: ProjectMemberDto,
}

#[derive(Deserialize)]
pub(crate) struct ProjectMemberListEnvelope {
    #[serde(default)]
    pub members: Vec<ProjectMemberDto>,
}

/// A payload plus its pagination descriptor, as returned to callers.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<PageInfo>,
}
