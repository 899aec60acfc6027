// ── Membership store ──
//
// Organization members and invitations (both paginated) plus the
// members of a single project.

use std::sync::Arc;

use tempo_api::types::PageQuery;
use tempo_api::ApiClient;

use crate::error::CoreError;
use crate::model::{EntityId, Invitation, Member, Organization, ProjectMember};
use crate::notice::NoticeSender;
use crate::store::paged::PagedList;

pub struct MemberStore {
    api: Arc<ApiClient>,
    org_id: String,
    notices: NoticeSender,
    members: PagedList<Member>,
    invitations: PagedList<Invitation>,
    project_members: Vec<ProjectMember>,
    loading: bool,
    mutating: bool,
}

impl MemberStore {
    pub fn new(api: Arc<ApiClient>, org_id: impl Into<String>, notices: NoticeSender) -> Self {
        Self {
            api,
            org_id: org_id.into(),
            notices,
            members: PagedList::new(),
            invitations: PagedList::new(),
            project_members: Vec::new(),
            loading: false,
            mutating: false,
        }
    }

    pub fn members(&self) -> &PagedList<Member> {
        &self.members
    }

    pub fn invitations(&self) -> &PagedList<Invitation> {
        &self.invitations
    }

    pub fn project_members(&self) -> &[ProjectMember] {
        &self.project_members
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    // ── Organization members ─────────────────────────────────────────

    pub async fn load_members(&mut self, page: PageQuery) -> Result<(), CoreError> {
        self.loading = true;
        let result = self.api.list_organization_members(&self.org_id, page).await;
        self.loading = false;

        let page = result.map_err(|e| self.fail(e, "Failed to load members"))?;
        let items = page.items.into_iter().map(Member::from).collect();
        self.members.reset(items, page.pagination);
        Ok(())
    }

    pub async fn update_member(
        &mut self,
        member_id: &EntityId,
        role: Option<&str>,
        billable_rate: Option<f64>,
    ) -> Result<Member, CoreError> {
        self.mutating = true;
        let result = self
            .api
            .update_member(&self.org_id, &member_id.to_string(), role, billable_rate)
            .await;
        self.mutating = false;

        let member: Member = result
            .map_err(|e| self.fail(e, "Failed to update member"))?
            .into();
        self.members.replace(member.clone());
        self.notices
            .success(format!("Member \"{}\" updated", member.name));
        Ok(member)
    }

    pub async fn deactivate_member(&mut self, member_id: &EntityId) -> Result<Member, CoreError> {
        self.mutating = true;
        let result = self
            .api
            .deactivate_member(&self.org_id, &member_id.to_string())
            .await;
        self.mutating = false;

        let member: Member = result
            .map_err(|e| self.fail(e, "Failed to deactivate member"))?
            .into();
        self.members.replace(member.clone());
        self.notices
            .success(format!("Member \"{}\" deactivated", member.name));
        Ok(member)
    }

    pub async fn remove_member(&mut self, member_id: &EntityId) -> Result<(), CoreError> {
        self.mutating = true;
        let result = self
            .api
            .delete_member(&self.org_id, &member_id.to_string())
            .await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to remove member"))?;
        self.members.remove(member_id);
        self.notices.success("Member removed");
        Ok(())
    }

    /// Invite a deactivated member back into the organization.
    pub async fn reinvite_member(&mut self, member_id: &EntityId) -> Result<(), CoreError> {
        self.mutating = true;
        let result = self
            .api
            .reinvite_member(&self.org_id, &member_id.to_string())
            .await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to re-invite member"))?;
        self.notices.success("Invitation sent");
        Ok(())
    }

    // ── Invitations ──────────────────────────────────────────────────

    pub async fn load_invitations(&mut self, page: PageQuery) -> Result<(), CoreError> {
        self.loading = true;
        let result = self.api.list_invitations(&self.org_id, page).await;
        self.loading = false;

        let page = result.map_err(|e| self.fail(e, "Failed to load invitations"))?;
        let items = page.items.into_iter().map(Invitation::from).collect();
        self.invitations.reset(items, page.pagination);
        Ok(())
    }

    pub async fn invite(&mut self, email: &str, role: Option<&str>) -> Result<Invitation, CoreError> {
        self.mutating = true;
        let result = self.api.invite_member(&self.org_id, email, role).await;
        self.mutating = false;

        let invitation: Invitation = result
            .map_err(|e| self.fail(e, "Failed to send invitation"))?
            .into();
        self.invitations.insert_front(invitation.clone());
        self.notices
            .success(format!("Invitation sent to {}", invitation.email));
        Ok(invitation)
    }

    /// Accept an invitation by its emailed token; returns the joined
    /// organization.
    pub async fn accept_invitation(&mut self, token: &str) -> Result<Organization, CoreError> {
        self.mutating = true;
        let result = self.api.accept_invitation(token).await;
        self.mutating = false;

        let org: Organization = result
            .map_err(|e| self.fail(e, "Failed to accept invitation"))?
            .into();
        self.notices.success(format!("Joined \"{}\"", org.name));
        Ok(org)
    }

    pub async fn delete_invitation(&mut self, invitation_id: &EntityId) -> Result<(), CoreError> {
        self.mutating = true;
        let result = self
            .api
            .delete_invitation(&self.org_id, &invitation_id.to_string())
            .await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to withdraw invitation"))?;
        self.invitations.remove(invitation_id);
        self.notices.success("Invitation withdrawn");
        Ok(())
    }

    pub async fn resend_invitation(&mut self, invitation_id: &EntityId) -> Result<(), CoreError> {
        self.mutating = true;
        let result = self
            .api
            .resend_invitation(&self.org_id, &invitation_id.to_string())
            .await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to resend invitation"))?;
        self.notices.success("Invitation resent");
        Ok(())
    }

    // ── Project members ──────────────────────────────────────────────

    pub async fn load_project_members(&mut self, project_id: &EntityId) -> Result<(), CoreError> {
        self.loading = true;
        let result = self
            .api
            .list_project_members(&self.org_id, &project_id.to_string())
            .await;
        self.loading = false;

        let dtos = result.map_err(|e| self.fail(e, "Failed to load project members"))?;
        self.project_members = dtos.into_iter().map(ProjectMember::from).collect();
        Ok(())
    }

    pub async fn add_project_member(
        &mut self,
        project_id: &EntityId,
        member_id: &EntityId,
        billable_rate: Option<f64>,
    ) -> Result<ProjectMember, CoreError> {
        self.mutating = true;
        let result = self
            .api
            .add_project_member(
                &self.org_id,
                &project_id.to_string(),
                &member_id.to_string(),
                billable_rate,
            )
            .await;
        self.mutating = false;

        let member: ProjectMember = result
            .map_err(|e| self.fail(e, "Failed to add project member"))?
            .into();
        self.project_members.push(member.clone());
        self.notices.success("Member added to project");
        Ok(member)
    }

    pub async fn update_project_member(
        &mut self,
        project_id: &EntityId,
        member_id: &EntityId,
        billable_rate: Option<f64>,
    ) -> Result<ProjectMember, CoreError> {
        self.mutating = true;
        let result = self
            .api
            .update_project_member(
                &self.org_id,
                &project_id.to_string(),
                &member_id.to_string(),
                billable_rate,
            )
            .await;
        self.mutating = false;

        let member: ProjectMember = result
            .map_err(|e| self.fail(e, "Failed to update project member"))?
            .into();
        match self
            .project_members
            .iter_mut()
            .find(|existing| existing.id == member.id)
        {
            Some(slot) => *slot = member.clone(),
            None => self.project_members.push(member.clone()),
        }
        self.notices.success("Project member updated");
        Ok(member)
    }

    pub async fn remove_project_member(
        &mut self,
        project_id: &EntityId,
        member_id: &EntityId,
    ) -> Result<(), CoreError> {
        self.mutating = true;
        let result = self
            .api
            .remove_project_member(
                &self.org_id,
                &project_id.to_string(),
                &member_id.to_string(),
            )
            .await;
        self.mutating = false;

        result.map_err(|e| self.fail(e, "Failed to remove project member"))?;
        self.project_members
            .retain(|member| &member.member_id != member_id);
        self.notices.success("Member removed from project");
        Ok(())
    }

    /// Organization members eligible to join the given project.
    pub async fn eligible_members(&self, project_id: &EntityId) -> Result<Vec<Member>, CoreError> {
        let dtos = self
            .api
            .list_eligible_members(&self.org_id, &project_id.to_string())
            .await
            .map_err(CoreError::from)?;
        Ok(dtos.into_iter().map(Member::from).collect())
    }

    fn fail(&self, err: tempo_api::Error, fallback: &str) -> CoreError {
        let err = CoreError::from(err);
        self.notices.error(err.user_message(fallback));
        err
    }
}
