// ── Client (customer) store ──
//
// Same shape as the project store: one page each of active and
// archived clients, confirmed entities folded into local state.

use std::sync::Arc;

use tempo_api::types::{ListScope, PageQuery};
use tempo_api::ApiClient;

use crate::error::CoreError;
use crate::model::{Client, EntityId};
use crate::notice::NoticeSender;
use crate::store::paged::PagedList;

pub struct ClientStore {
    api: Arc<ApiClient>,
    org_id: String,
    notices: NoticeSender,
    active: PagedList<Client>,
    archived: PagedList<Client>,
    loading: bool,
    mutating: bool,
}

impl ClientStore {
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

    pub fn active(&self) -> &PagedList<Client> {
        &self.active
    }

    pub fn archived(&self) -> &PagedList<Client> {
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
        let result = self.api.list_clients(&self.org_id, scope, page).await;
        self.loading = false;

        let page = result.map_err(|e| self.fail(e, "Failed to load clients"))?;
        let items = page.items.into_iter().map(Client::from).collect();
        match scope {
            ListScope::Active => self.active.reset(items, page.pagination),
            ListScope::Archived => self.archived.reset(items, page.pagination),
        }
        Ok(())
    }

    pub async fn create(&mut self, name: &str) -> Result<Client, CoreError> {
        self.mutating = true;
        let result = self.api.create_client(&self.org_id, name).await;
        self.mutating = false;

        let client: Client = result
            .map_err(|e| self.fail(e, "Failed to create client"))?
            .into();
        self.active.insert_front(client.clone());
        self.notices
            .success(format!("Client \"{}\" created", client.name));
        Ok(client)
    }

    pub async fn edit(&mut self, id: &EntityId, name: &str) -> Result<Client, CoreError> {
        self.mutating = true;
        let result = self.api.edit_client(&self.org_id, &id.to_string(), name).await;
        self.mutating = false;

        let client: Client = result
            .map_err(|e| self.fail(e, "Failed to rename client"))?
            .into();
        if !self.active.replace(client.clone()) {
            self.archived.replace(client.clone());
        }
        self.notices
            .success(format!("Client \"{}\" updated", client.name));
        Ok(client)
    }

    pub async fn archive(&mut self, id: &EntityId) -> Result<Client, CoreError> {
        self.mutating = true;
        let result = self.api.archive_client(&self.org_id, &id.to_string()).await;
        self.mutating = false;

        let client: Client = result
            .map_err(|e| self.fail(e, "Failed to archive client"))?
            .into();
        self.active.remove(&client.id);
        self.archived.insert_front(client.clone());
        self.notices
            .success(format!("Client \"{}\" archived", client.name));
        Ok(client)
    }

    pub async fn unarchive(&mut self, id: &EntityId) -> Result<Client, CoreError> {
        self.mutating = true;
        let result = self.api.unarchive_client(&self.org_id, &id.to_string()).await;
        self.mutating = false;

        let client: Client = result
            .map_err(|e| self.fail(e, "Failed to restore client"))?
            .into();
        self.archived.remove(&client.id);
        self.active.insert_front(client.clone());
        self.notices
            .success(format!("Client \"{}\" restored", client.name));
        Ok(client)
    }

    pub async fn delete(&mut self, id: &EntityId) -> Result<(), CoreError> {
        self.mutating = true;
        let result = self.api.delete_client(&self.org_id, &id.to_string()).await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to delete client"))?;
        self.active.remove(id);
        self.archived.remove(id);
        self.notices.success("Client deleted");
        Ok(())
    }

    fn fail(&self, err: tempo_api::Error, fallback: &str) -> CoreError {
        let err = CoreError::from(err);
        self.notices.error(err.user_message(fallback));
        err
    }
}
