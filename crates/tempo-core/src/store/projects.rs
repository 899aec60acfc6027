// ── Project store ──
//
// Mirrors one page each of the active and archived project lists.
// Every action follows the same shape: set the busy flag, call the
// API, fold the confirmed entity into local state, emit exactly one
// notice, clear the flag on both paths. Folding lives in pure
// `apply_*` methods so the bookkeeping is testable without a server.

use std::sync::Arc;

use tempo_api::types::{ListScope, PageQuery, ProjectDraft};
use tempo_api::ApiClient;

use crate::error::CoreError;
use crate::model::{Client, EntityId, Project};
use crate::notice::NoticeSender;
use crate::store::paged::PagedList;

pub struct ProjectStore {
    api: Arc<ApiClient>,
    org_id: String,
    notices: NoticeSender,
    active: PagedList<Project>,
    archived: PagedList<Project>,
    loading: bool,
    mutating: bool,
}

impl ProjectStore {
    pub fn new(api: Arc<ApiClient>, org_id: impl Into<String>, notices: NoticeSender) -> Self {
        Self {
            api,
            org_id: org_id.into(),
            notices,
            active: PagedList::new(),
            archived: PagedList::new(),
            loading: false,
            mutating: false,
        }
    }

    pub fn active(&self) -> &PagedList<Project> {
        &self.active
    }

    pub fn archived(&self) -> &PagedList<Project> {
        &self.archived
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    // ── Actions ──────────────────────────────────────────────────────

    pub async fn load(&mut self, scope: ListScope, page: PageQuery) -> Result<(), CoreError> {
        self.loading = true;
        let result = self.api.list_projects(&self.org_id, scope, page).await;
        self.loading = false;

        let page = result.map_err(|e| self.fail(e, "Failed to load projects"))?;
        let items = page.items.into_iter().map(Project::from).collect();
        match scope {
            ListScope::Active => self.active.reset(items, page.pagination),
            ListScope::Archived => self.archived.reset(items, page.pagination),
        }
        Ok(())
    }

    pub async fn create(&mut self, draft: &ProjectDraft) -> Result<Project, CoreError> {
        self.mutating = true;
        let result = self.api.create_project(&self.org_id, draft).await;
        self.mutating = false;

        let project: Project = result
            .map_err(|e| self.fail(e, "Failed to create project"))?
            .into();
        self.apply_created(project.clone());
        self.notices
            .success(format!("Project \"{}\" created", project.name));
        Ok(project)
    }

    pub async fn update(&mut self, id: &EntityId, draft: &ProjectDraft) -> Result<Project, CoreError> {
        self.mutating = true;
        let result = self
            .api
            .update_project(&self.org_id, &id.to_string(), draft)
            .await;
        self.mutating = false;

        let project: Project = result
            .map_err(|e| self.fail(e, "Failed to update project"))?
            .into();
        self.apply_updated(project.clone());
        self.notices
            .success(format!("Project \"{}\" updated", project.name));
        Ok(project)
    }

    pub async fn archive(&mut self, id: &EntityId) -> Result<Project, CoreError> {
        self.mutating = true;
        let result = self.api.archive_project(&self.org_id, &id.to_string()).await;
        self.mutating = false;

        let project: Project = result
            .map_err(|e| self.fail(e, "Failed to archive project"))?
            .into();
        self.apply_archived(project.clone());
        self.notices
            .success(format!("Project \"{}\" archived", project.name));
        Ok(project)
    }

    pub async fn unarchive(&mut self, id: &EntityId) -> Result<Project, CoreError> {
        self.mutating = true;
        let result = self
            .api
            .unarchive_project(&self.org_id, &id.to_string())
            .await;
        self.mutating = false;

        let project: Project = result
            .map_err(|e| self.fail(e, "Failed to restore project"))?
            .into();
        self.apply_unarchived(project.clone());
        self.notices
            .success(format!("Project \"{}\" restored", project.name));
        Ok(project)
    }

    pub async fn delete(&mut self, id: &EntityId) -> Result<(), CoreError> {
        self.mutating = true;
        let result = self.api.delete_project(&self.org_id, &id.to_string()).await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to delete project"))?;
        self.apply_deleted(id);
        self.notices.success("Project deleted");
        Ok(())
    }

    /// Fetch a single project straight from the server.
    pub async fn get(&self, id: &EntityId) -> Result<Project, CoreError> {
        let dto = self
            .api
            .get_project(&self.org_id, &id.to_string())
            .await
            .map_err(CoreError::from)?;
        Ok(dto.into())
    }

    /// Clients offered in the project form's client picker.
    pub async fn assignable_clients(&self) -> Result<Vec<Client>, CoreError> {
        let dtos = self
            .api
            .list_assignable_clients(&self.org_id)
            .await
            .map_err(CoreError::from)?;
        Ok(dtos.into_iter().map(Client::from).collect())
    }

    // ── Folding ──────────────────────────────────────────────────────

    fn apply_created(&mut self, project: Project) {
        self.active.insert_front(project);
    }

    fn apply_updated(&mut self, project: Project) {
        if !self.active.replace(project.clone()) {
            self.archived.replace(project);
        }
    }

    fn apply_archived(&mut self, project: Project) {
        self.active.remove(&project.id);
        self.archived.insert_front(project);
    }

    fn apply_unarchived(&mut self, project: Project) {
        self.archived.remove(&project.id);
        self.active.insert_front(project);
    }

    fn apply_deleted(&mut self, id: &EntityId) {
        self.active.remove(id);
        self.archived.remove(id);
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

    fn store() -> ProjectStore {
        let api = ApiClient::from_reqwest(
            "http://localhost",
            TransportConfig::default().build_client().unwrap(),
        )
        .unwrap();
        let (notices, _rx) = NoticeSender::channel();
        ProjectStore::new(Arc::new(api), "org1", notices)
    }

    fn project(id: &str, archived: bool) -> Project {
        Project {
            id: EntityId::from(id),
            name: id.to_owned(),
            color: None,
            billable: false,
            billable_rate: None,
            estimated_time: None,
            client_id: None,
            archived_at: archived.then(|| "2026-01-01T00:00:00Z".parse().unwrap()),
        }
    }

    fn info(total: u64, page_size: u32) -> PageInfo {
        PageInfo {
            total,
            page: 1,
            page_size,
            total_pages: u32::try_from(total.div_ceil(u64::from(page_size)).max(1)).unwrap(),
        }
    }

    #[test]
    fn created_project_heads_the_active_list() {
        let mut store = store();
        store
            .active
            .reset(vec![project("a", false)], Some(info(10, 10)));

        store.apply_created(project("new", false));

        assert_eq!(store.active.items()[0].name, "new");
        let info = store.active.pagination().unwrap();
        assert_eq!(info.total, 11);
        assert_eq!(info.total_pages, 2);
    }

    #[test]
    fn archive_moves_between_lists_and_adjusts_both_counts() {
        let mut store = store();
        store
            .active
            .reset(vec![project("a", false), project("b", false)], Some(info(2, 10)));
        store.archived.reset(vec![], Some(info(0, 10)));

        store.apply_archived(project("a", true));

        assert!(!store.active.contains(&EntityId::from("a")));
        assert_eq!(store.archived.items()[0].id, EntityId::from("a"));
        assert_eq!(store.active.pagination().unwrap().total, 1);
        assert_eq!(store.archived.pagination().unwrap().total, 1);
    }

    #[test]
    fn unarchive_moves_back_to_active() {
        let mut store = store();
        store.active.reset(vec![], Some(info(0, 10)));
        store
            .archived
            .reset(vec![project("a", true)], Some(info(1, 10)));

        store.apply_unarchived(project("a", false));

        assert!(store.active.contains(&EntityId::from("a")));
        assert!(!store.archived.contains(&EntityId::from("a")));
        assert_eq!(store.archived.pagination().unwrap().total, 0);
        assert_eq!(store.archived.pagination().unwrap().total_pages, 1);
    }

    #[test]
    fn delete_removes_from_both_lists_with_floored_counts() {
        let mut store = store();
        store
            .active
            .reset(vec![project("a", false)], Some(info(0, 10)));
        store
            .archived
            .reset(vec![project("a", true)], Some(info(1, 10)));

        store.apply_deleted(&EntityId::from("a"));

        assert!(store.active.is_empty());
        assert!(store.archived.is_empty());
        assert_eq!(store.active.pagination().unwrap().total, 0);
        assert_eq!(store.archived.pagination().unwrap().total, 0);
    }

    #[test]
    fn update_replaces_in_whichever_list_holds_the_project() {
        let mut store = store();
        store
            .archived
            .reset(vec![project("a", true)], Some(info(1, 10)));

        let mut renamed = project("a", true);
        renamed.name = "renamed".into();
        store.apply_updated(renamed);

        assert_eq!(
            store.archived.get(&EntityId::from("a")).unwrap().name,
            "renamed"
        );
        assert_eq!(store.archived.pagination().unwrap().total, 1);
    }
}
