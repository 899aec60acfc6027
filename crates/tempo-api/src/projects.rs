// ── Project endpoints ──

use crate::Error;
use crate::client::ApiClient;
use crate::types::{
    ClientDto, ListScope, Page, PageQuery, ProjectDraft, ProjectDto, ProjectEnvelope,
    ProjectListEnvelope,
};

impl ApiClient {
    pub async fn create_project(
        &self,
        org_id: &str,
        draft: &ProjectDraft,
    ) -> Result<ProjectDto, Error> {
        let env: ProjectEnvelope = self
            .post(&format!("project/create/{org_id}"), draft)
            .await?;
        Ok(env.project)
    }

    pub async fn list_projects(
        &self,
        org_id: &str,
        scope: ListScope,
        page: PageQuery,
    ) -> Result<Page<ProjectDto>, Error> {
        let mut params = page.to_params();
        params.push(("type", scope.as_param().to_owned()));

        let env: ProjectListEnvelope = self
            .get_with_params(&format!("project/{org_id}"), &params)
            .await?;
        Ok(Page {
            items: env.projects,
            pagination: env.pagination,
        })
    }

    pub async fn get_project(&self, org_id: &str, project_id: &str) -> Result<ProjectDto, Error> {
        let env: ProjectEnvelope = self
            .get(&format!("project/{project_id}/organization/{org_id}"))
            .await?;
        Ok(env.project)
    }

    pub async fn update_project(
        &self,
        org_id: &str,
        project_id: &str,
        draft: &ProjectDraft,
    ) -> Result<ProjectDto, Error> {
        let env: ProjectEnvelope = self
            .put(
                &format!("project/update/{project_id}/organization/{org_id}"),
                draft,
            )
            .await?;
        Ok(env.project)
    }

    pub async fn archive_project(
        &self,
        org_id: &str,
        project_id: &str,
    ) -> Result<ProjectDto, Error> {
        let env: ProjectEnvelope = self
            .put_empty(&format!("project/archive/{project_id}/{org_id}"))
            .await?;
        Ok(env.project)
    }

    pub async fn unarchive_project(
        &self,
        org_id: &str,
        project_id: &str,
    ) -> Result<ProjectDto, Error> {
        let env: ProjectEnvelope = self
            .put_empty(&format!("project/unarchive/{project_id}/{org_id}"))
            .await?;
        Ok(env.project)
    }

    pub async fn delete_project(&self, org_id: &str, project_id: &str) -> Result<(), Error> {
        self.delete(&format!("project/{project_id}/{org_id}")).await
    }

    /// Clients available for assignment when creating/editing a project.
    pub async fn list_assignable_clients(&self, org_id: &str) -> Result<Vec<ClientDto>, Error> {
        #[derive(serde::Deserialize)]
        struct Envelope {
            #[serde(default)]
            clients: Vec<ClientDto>,
        }

        let env: Envelope = self.get(&format!("project/clients/{org_id}")).await?;
        Ok(env.clients)
    }
}
