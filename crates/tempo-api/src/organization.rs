// ── Organization & membership endpoints ──
//
// Organization CRUD plus the member/invitation lifecycle. Invitation
// mutations live under the `member/` route prefix on the backend.

use serde::Serialize;

use crate::Error;
use crate::client::ApiClient;
use crate::types::{
    InvitationDto, InvitationEnvelope, InvitationListEnvelope, MemberDto, MemberEnvelope,
    MemberListEnvelope, OrganizationDto, OrganizationEnvelope, Page, PageQuery,
};

impl ApiClient {
    // ── Organization CRUD ────────────────────────────────────────────

    pub async fn get_organization(&self, org_id: &str) -> Result<OrganizationDto, Error> {
        let env: OrganizationEnvelope = self.get(&format!("organization/{org_id}")).await?;
        Ok(env.organization)
    }

    pub async fn create_organization(&self, name: &str) -> Result<OrganizationDto, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'a str,
        }

        let env: OrganizationEnvelope = self.post("organization", &Body { name }).await?;
        Ok(env.organization)
    }

    pub async fn update_organization(
        &self,
        org_id: &str,
        name: &str,
    ) -> Result<OrganizationDto, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'a str,
        }

        let env: OrganizationEnvelope = self
            .put(&format!("organization/{org_id}"), &Body { name })
            .await?;
        Ok(env.organization)
    }

    pub async fn delete_organization(&self, org_id: &str) -> Result<(), Error> {
        self.delete(&format!("organization/{org_id}")).await
    }

    /// Switch the session's active organization.
    pub async fn switch_organization(&self, org_id: &str) -> Result<OrganizationDto, Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            organization_id: &'a str,
        }

        let env: OrganizationEnvelope = self
            .post(
                "organization/switch",
                &Body {
                    organization_id: org_id,
                },
            )
            .await?;
        Ok(env.organization)
    }

    // ── Members ──────────────────────────────────────────────────────

    pub async fn list_organization_members(
        &self,
        org_id: &str,
        page: PageQuery,
    ) -> Result<Page<MemberDto>, Error> {
        let env: MemberListEnvelope = self
            .get_with_params(&format!("organization/{org_id}/members"), &page.to_params())
            .await?;
        Ok(Page {
            items: env.members,
            pagination: env.pagination,
        })
    }

    pub async fn update_member(
        &self,
        org_id: &str,
        member_id: &str,
        role: Option<&str>,
        billable_rate: Option<f64>,
    ) -> Result<MemberDto, Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            role: Option<&'a str>,
            billable_rate: Option<f64>,
        }

        let env: MemberEnvelope = self
            .put(
                &format!("member/{org_id}/members/{member_id}"),
                &Body {
                    role,
                    billable_rate,
                },
            )
            .await?;
        Ok(env.member)
    }

    pub async fn deactivate_member(&self, org_id: &str, member_id: &str) -> Result<MemberDto, Error> {
        let env: MemberEnvelope = self
            .patch_empty(&format!(
                "organization/{org_id}/members/{member_id}/deactivate"
            ))
            .await?;
        Ok(env.member)
    }

    pub async fn delete_member(&self, org_id: &str, member_id: &str) -> Result<(), Error> {
        self.delete(&format!("organization/{org_id}/members/{member_id}"))
            .await
    }

    /// Re-send an invite to a deactivated member.
    pub async fn reinvite_member(&self, org_id: &str, member_id: &str) -> Result<(), Error> {
        let _: serde_json::Value = self
            .post_empty(&format!("member/{org_id}/members/{member_id}/reinvite"))
            .await?;
        Ok(())
    }

    // ── Invitations ──────────────────────────────────────────────────

    pub async fn list_invitations(
        &self,
        org_id: &str,
        page: PageQuery,
    ) -> Result<Page<InvitationDto>, Error> {
        let env: InvitationListEnvelope = self
            .get_with_params(
                &format!("organization/{org_id}/invitations"),
                &page.to_params(),
            )
            .await?;
        Ok(Page {
            items: env.invitations,
            pagination: env.pagination,
        })
    }

    pub async fn invite_member(
        &self,
        org_id: &str,
        email: &str,
        role: Option<&str>,
    ) -> Result<InvitationDto, Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            role: Option<&'a str>,
        }

        let env: InvitationEnvelope = self
            .post(&format!("member/{org_id}/invite"), &Body { email, role })
            .await?;
        Ok(env.invitation)
    }

    /// Accept an invitation by its emailed token.
    pub async fn accept_invitation(&self, token: &str) -> Result<OrganizationDto, Error> {
        let env: OrganizationEnvelope = self
            .put_empty(&format!("member/invitation/accept/{token}"))
            .await?;
        Ok(env.organization)
    }

    pub async fn delete_invitation(&self, org_id: &str, invitation_id: &str) -> Result<(), Error> {
        self.delete(&format!("organization/{org_id}/invitations/{invitation_id}"))
            .await
    }

    pub async fn resend_invitation(&self, org_id: &str, invitation_id: &str) -> Result<(), Error> {
        let _: serde_json::Value = self
            .post_empty(&format!(
                "member/{org_id}/invitations/{invitation_id}/resend"
            ))
            .await?;
        Ok(())
    }
}
