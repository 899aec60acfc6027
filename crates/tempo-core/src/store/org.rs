// ── Organization store ──
//
// CRUD for the organization itself. Switching organizations lives on
// `Session`, which also re-seeds the running-timer slot.

use std::sync::Arc;

use tempo_api::ApiClient;

use crate::error::CoreError;
use crate::model::{EntityId, Organization};
use crate::notice::NoticeSender;

pub struct OrgStore {
    api: Arc<ApiClient>,
    notices: NoticeSender,
    current: Option<Organization>,
    mutating: bool,
}

impl OrgStore {
    pub fn new(api: Arc<ApiClient>, notices: NoticeSender) -> Self {
        Self {
            api,
            notices,
            current: None,
            mutating: false,
        }
    }

    pub fn current(&self) -> Option<&Organization> {
        self.current.as_ref()
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    // ── Actions ──────────────────────────────────────────────────────

    pub async fn load(&mut self, org_id: &EntityId) -> Result<Organization, CoreError> {
        let org: Organization = self
            .api
            .get_organization(&org_id.to_string())
            .await
            .map_err(|e| self.fail(e, "Failed to load organization"))?
            .into();
        self.current = Some(org.clone());
        Ok(org)
    }

    pub async fn create(&mut self, name: &str) -> Result<Organization, CoreError> {
        self.mutating = true;
        let result = self.api.create_organization(name).await;
        self.mutating = false;

        let org: Organization = result
            .map_err(|e| self.fail(e, "Failed to create organization"))?
            .into();
        self.notices
            .success(format!("Organization \"{}\" created", org.name));
        Ok(org)
    }

    pub async fn rename(&mut self, org_id: &EntityId, name: &str) -> Result<Organization, CoreError> {
        self.mutating = true;
        let result = self.api.update_organization(&org_id.to_string(), name).await;
        self.mutating = false;

        let org: Organization = result
            .map_err(|e| self.fail(e, "Failed to rename organization"))?
            .into();
        if self.current.as_ref().is_some_and(|cur| cur.id == org.id) {
            self.current = Some(org.clone());
        }
        self.notices
            .success(format!("Organization renamed to \"{}\"", org.name));
        Ok(org)
    }

    pub async fn delete(&mut self, org_id: &EntityId) -> Result<(), CoreError> {
        self.mutating = true;
        let result = self.api.delete_organization(&org_id.to_string()).await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to delete organization"))?;
        if self.current.as_ref().is_some_and(|cur| &cur.id == org_id) {
            self.current = None;
        }
        self.notices.success("Organization deleted");
        Ok(())
    }

    fn fail(&self, err: tempo_api::Error, fallback: &str) -> CoreError {
        let err = CoreError::from(err);
        self.notices.error(err.user_message(fallback));
        err
    }
}
