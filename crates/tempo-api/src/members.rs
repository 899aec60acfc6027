// ── Project-member endpoints ──

use serde::Serialize;

use crate::Error;
use crate::client::ApiClient;
use crate::types::{
    MemberDto, ProjectMemberDto, ProjectMemberEnvelope, ProjectMemberListEnvelope,
};

impl ApiClient {
    pub async fn list_project_members(
        &self,
        org_id: &str,
        project_id: &str,
    ) -> Result<Vec<ProjectMemberDto>, Error> {
        let env: ProjectMemberListEnvelope = self
            .get(&format!("project/project-members/{project_id}/{org_id}"))
            .await?;
        Ok(env.members)
    }

    pub async fn add_project_member(
        &self,
        org_id: &str,
        project_id: &str,
        member_id: &str,
        billable_rate: Option<f64>,
    ) -> Result<ProjectMemberDto, Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            member_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            billable_rate: Option<f64>,
        }

        let env: ProjectMemberEnvelope = self
            .post(
                &format!("project/project-members/{project_id}/{org_id}"),
                &Body {
                    member_id,
                    billable_rate,
                },
            )
            .await?;
        Ok(env.member)
    }

    pub async fn update_project_member(
        &self,
        org_id: &str,
        project_id: &str,
        member_id: &str,
        billable_rate: Option<f64>,
    ) -> Result<ProjectMemberDto, Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            // Serialized even when null -- null clears the override.
            billable_rate: Option<f64>,
        }

        let env: ProjectMemberEnvelope = self
            .put(
                &format!("project/project-members/{project_id}/{org_id}/{member_id}"),
                &Body { billable_rate },
            )
            .await?;
        Ok(env.member)
    }

    pub async fn remove_project_member(
        &self,
        org_id: &str,
        project_id: &str,
        member_id: &str,
    ) -> Result<(), Error> {
        self.delete(&format!(
            "project/project-members/{project_id}/{org_id}/{member_id}"
        ))
        .await
    }

    /// Organization members eligible to join the given project.
    pub async fn list_eligible_members(
        &self,
        org_id: &str,
        project_id: &str,
    ) -> Result<Vec<MemberDto>, Error> {
        #[derive(serde::Deserialize)]
        struct Envelope {
            #[serde(default)]
            members: Vec<MemberDto>,
        }

        let env: Envelope = self
            .get_with_params(
                &format!("project/org-members/{org_id}"),
                &[("projectId", project_id.to_owned())],
            )
            .await?;
        Ok(env.members)
    }
}
