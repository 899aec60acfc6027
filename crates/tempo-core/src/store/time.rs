// ── Time entry store ──
//
// One page of entries for a selected calendar date, plus the picker
// data (tags, projects with tasks) and the timer actions. Confirmed
// entries are folded into the visible list only when their start falls
// on the selected date; an entry confirmed for another day leaves both
// the list and its pagination untouched.

use std::sync::Arc;

use chrono::NaiveDate;

use tempo_api::types::{DateFilter, PageQuery, TimeEntryDraft, TimeEntryUpdates, TimerStart};
use tempo_api::ApiClient;

use crate::error::CoreError;
use crate::model::{EntityId, ProjectWithTasks, Tag, TimeEntry};
use crate::notice::NoticeSender;
use crate::session::TimerSlot;
use crate::store::paged::PagedList;

pub struct TimeStore {
    api: Arc<ApiClient>,
    org_id: String,
    notices: NoticeSender,
    timer: TimerSlot,
    entries: PagedList<TimeEntry>,
    tags: Vec<Tag>,
    projects_with_tasks: Vec<ProjectWithTasks>,
    selected_date: NaiveDate,
    loading: bool,
    mutating: bool,
}

impl TimeStore {
    pub fn new(
        api: Arc<ApiClient>,
        org_id: impl Into<String>,
        notices: NoticeSender,
        timer: TimerSlot,
        selected_date: NaiveDate,
    ) -> Self {
        Self {
            api,
            org_id: org_id.into(),
            notices,
            timer,
            entries: PagedList::new(),
            tags: Vec::new(),
            projects_with_tasks: Vec::new(),
            selected_date,
            loading: false,
            mutating: false,
        }
    }

    pub fn entries(&self) -> &PagedList<TimeEntry> {
        &self.entries
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn projects_with_tasks(&self) -> &[ProjectWithTasks] {
        &self.projects_with_tasks
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Change the visible day. The stale page stays until the next
    /// [`load_entries`](Self::load_entries).
    pub fn set_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    // ── Loading ──────────────────────────────────────────────────────

    pub async fn load_entries(&mut self, page: PageQuery) -> Result<(), CoreError> {
        self.loading = true;
        let result = self
            .api
            .list_time_entries(&self.org_id, page, Some(DateFilter(self.selected_date)))
            .await;
        self.loading = false;

        let page = result.map_err(|e| self.fail(e, "Failed to load time entries"))?;
        let items = page.items.into_iter().map(TimeEntry::from).collect();
        self.entries.reset(items, page.pagination);
        Ok(())
    }

    pub async fn load_tags(&mut self) -> Result<(), CoreError> {
        let dtos = self
            .api
            .list_tags(&self.org_id)
            .await
            .map_err(|e| self.fail(e, "Failed to load tags"))?;
        self.tags = dtos.into_iter().map(Tag::from).collect();
        Ok(())
    }

    pub async fn load_projects_with_tasks(&mut self) -> Result<(), CoreError> {
        let dtos = self
            .api
            .list_projects_with_tasks(&self.org_id)
            .await
            .map_err(|e| self.fail(e, "Failed to load projects"))?;
        self.projects_with_tasks = dtos.into_iter().map(ProjectWithTasks::from).collect();
        Ok(())
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub async fn start_timer(&mut self, start: &TimerStart) -> Result<TimeEntry, CoreError> {
        self.mutating = true;
        let result = self.api.start_timer(&self.org_id, start).await;
        self.mutating = false;

        let entry: TimeEntry = result
            .map_err(|e| self.fail(e, "Failed to start timer"))?
            .into();
        self.timer.set(entry.clone());
        self.notices.success("Timer started");
        Ok(entry)
    }

    /// Stop the running timer. The completed entry joins the visible
    /// list only if it belongs to the selected date.
    pub async fn stop_timer(&mut self) -> Result<TimeEntry, CoreError> {
        let Some(running) = self.timer.current() else {
            let err = CoreError::Rejected {
                message: "No timer is running".into(),
            };
            self.notices.error(err.to_string());
            return Err(err);
        };

        self.mutating = true;
        let result = self
            .api
            .stop_timer(&self.org_id, &running.id.to_string())
            .await;
        self.mutating = false;

        let entry: TimeEntry = result
            .map_err(|e| self.fail(e, "Failed to stop timer"))?
            .into();
        self.timer.clear();
        self.apply_confirmed(entry.clone());
        self.notices.success("Timer stopped");
        Ok(entry)
    }

    // ── Entry CRUD ───────────────────────────────────────────────────

    pub async fn create(&mut self, draft: &TimeEntryDraft) -> Result<TimeEntry, CoreError> {
        self.mutating = true;
        let result = self.api.create_time_entry(&self.org_id, draft).await;
        self.mutating = false;

        let entry: TimeEntry = result
            .map_err(|e| self.fail(e, "Failed to create time entry"))?
            .into();
        self.apply_confirmed(entry.clone());
        self.notices.success("Time entry created");
        Ok(entry)
    }

    pub async fn update(
        &mut self,
        id: &EntityId,
        draft: &TimeEntryDraft,
    ) -> Result<TimeEntry, CoreError> {
        self.mutating = true;
        let result = self
            .api
            .update_time_entry(&self.org_id, &id.to_string(), draft)
            .await;
        self.mutating = false;

        let entry: TimeEntry = result
            .map_err(|e| self.fail(e, "Failed to update time entry"))?
            .into();
        self.entries.replace(entry.clone());
        self.notices.success("Time entry updated");
        Ok(entry)
    }

    pub async fn delete(&mut self, id: &EntityId) -> Result<(), CoreError> {
        self.mutating = true;
        let result = self.api.delete_time_entry(&self.org_id, &id.to_string()).await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to delete time entry"))?;
        self.entries.remove(id);
        self.notices.success("Time entry deleted");
        Ok(())
    }

    /// Apply the same field updates to several entries at once, then
    /// mirror the merge locally.
    pub async fn bulk_update(
        &mut self,
        ids: &[EntityId],
        updates: &TimeEntryUpdates,
    ) -> Result<(), CoreError> {
        let id_strings: Vec<String> = ids.iter().map(ToString::to_string).collect();

        self.mutating = true;
        let result = self
            .api
            .bulk_update_time_entries(&self.org_id, &id_strings, updates)
            .await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to update time entries"))?;
        self.apply_bulk_update(ids, updates);
        self.notices
            .success(format!("{} time entries updated", ids.len()));
        Ok(())
    }

    pub async fn bulk_delete(&mut self, ids: &[EntityId]) -> Result<(), CoreError> {
        let id_strings: Vec<String> = ids.iter().map(ToString::to_string).collect();

        self.mutating = true;
        let result = self
            .api
            .bulk_delete_time_entries(&self.org_id, &id_strings)
            .await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to delete time entries"))?;
        let removed = self.entries.remove_many(ids);
        self.notices.success(format!("{removed} time entries deleted"));
        Ok(())
    }

    // ── Folding ──────────────────────────────────────────────────────

    /// Same-date gate: a confirmed entry joins the page (head insert,
    /// counts bumped) only when it starts on the selected date.
    fn apply_confirmed(&mut self, entry: TimeEntry) {
        if entry.starts_on(self.selected_date) {
            self.entries.insert_front(entry);
        }
    }

    /// Shallow merge of bulk updates into whichever targets are on this
    /// page. Optional fields only overwrite when set; `billable` always
    /// applies; tags are left to the next reload.
    fn apply_bulk_update(&mut self, ids: &[EntityId], updates: &TimeEntryUpdates) {
        for id in ids {
            let Some(existing) = self.entries.get(id) else {
                continue;
            };
            let mut merged = existing.clone();
            if let Some(description) = &updates.description {
                merged.description = Some(description.clone());
            }
            if let Some(project_id) = &updates.project_id {
                merged.project_id = Some(EntityId::from(project_id.as_str()));
            }
            if let Some(task_id) = &updates.task_id {
                merged.task_id = Some(EntityId::from(task_id.as_str()));
            }
            merged.billable = updates.billable;
            self.entries.replace(merged);
        }
    }

    fn fail(&self, err: tempo_api::Error, fallback: &str) -> CoreError {
        let err = CoreError::from(err);
        self.notices.error(err.user_message(fallback));
        err
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempo_api::types::PageInfo;
    use tempo_api::TransportConfig;

    fn store(date: &str) -> TimeStore {
        let api = ApiClient::from_reqwest(
            "http://localhost",
            TransportConfig::default().build_client().unwrap(),
        )
        .unwrap();
        let (notices, _rx) = NoticeSender::channel();
        TimeStore::new(
            Arc::new(api),
            "org1",
            notices,
            TimerSlot::new(),
            date.parse().unwrap(),
        )
    }

    fn entry(id: &str, start: &str) -> TimeEntry {
        TimeEntry {
            id: EntityId::from(id),
            description: None,
            start: start.parse().unwrap(),
            end: Some(start.parse().unwrap()),
            billable: false,
            project_id: None,
            task_id: None,
            client_id: None,
            tags: Vec::new(),
        }
    }

    fn info(total: u64) -> PageInfo {
        PageInfo {
            total,
            page: 1,
            page_size: 10,
            total_pages: 1,
        }
    }

    #[test]
    fn confirmed_entry_on_the_selected_date_heads_the_list() {
        let mut store = store("2026-03-01");
        store
            .entries
            .reset(vec![entry("a", "2026-03-01T09:00:00Z")], Some(info(1)));

        store.apply_confirmed(entry("new", "2026-03-01T12:00:00Z"));

        assert_eq!(store.entries.items()[0].id, EntityId::from("new"));
        assert_eq!(store.entries.pagination().unwrap().total, 2);
    }

    #[test]
    fn confirmed_entry_off_the_selected_date_changes_nothing() {
        let mut store = store("2026-03-01");
        store
            .entries
            .reset(vec![entry("a", "2026-03-01T09:00:00Z")], Some(info(1)));

        store.apply_confirmed(entry("elsewhere", "2026-03-02T00:30:00Z"));

        assert_eq!(store.entries.len(), 1);
        assert_eq!(store.entries.pagination().unwrap().total, 1);
    }

    #[test]
    fn bulk_delete_arithmetic_matches_the_page() {
        let mut store = store("2026-03-01");
        store.entries.reset(
            vec![
                entry("a", "2026-03-01T08:00:00Z"),
                entry("b", "2026-03-01T09:00:00Z"),
                entry("c", "2026-03-01T10:00:00Z"),
                entry("d", "2026-03-01T11:00:00Z"),
                entry("e", "2026-03-01T12:00:00Z"),
            ],
            Some(info(5)),
        );

        let removed = store.entries.remove_many(&[
            EntityId::from("a"),
            EntityId::from("b"),
            EntityId::from("c"),
        ]);

        assert_eq!(removed, 3);
        let info = store.entries.pagination().unwrap();
        assert_eq!(info.total, 2);
        assert_eq!(info.total_pages, 1);
    }

    #[test]
    fn bulk_update_merges_only_set_fields() {
        let mut store = store("2026-03-01");
        let mut existing = entry("a", "2026-03-01T09:00:00Z");
        existing.description = Some("before".into());
        existing.project_id = Some(EntityId::from("p1"));
        store.entries.reset(vec![existing], Some(info(1)));

        store.apply_bulk_update(
            &[EntityId::from("a")],
            &TimeEntryUpdates {
                description: None,
                project_id: Some("p2".into()),
                task_id: None,
                billable: true,
                tag_ids: None,
            },
        );

        let merged = store.entries.get(&EntityId::from("a")).unwrap();
        assert_eq!(merged.description.as_deref(), Some("before"));
        assert_eq!(merged.project_id, Some(EntityId::from("p2")));
        assert!(merged.billable);
    }
}
