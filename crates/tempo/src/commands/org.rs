//! Organization command handlers: the organization itself, its
//! members, and its invitations.

use tabled::Tabled;

use tempo_core::{
    EntityId, Invitation, Member, MemberStore, OrgStore, Organization, PageQuery, Session,
};

use crate::cli::{GlobalOpts, OrgArgs, OrgCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&Member> for MemberRow {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.clone(),
            email: m.email.clone(),
            role: m.role.clone(),
            rate: m
                .billable_rate
                .map(|r| format!("{r:.2}"))
                .unwrap_or_default(),
            active: if m.is_active { "yes" } else { "no" }.into(),
        }
    }
}

#[derive(Tabled)]
struct InvitationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Expires")]
    expires: String,
}

impl From<&Invitation> for InvitationRow {
    fn from(i: &Invitation) -> Self {
        Self {
            id: i.id.to_string(),
            email: i.email.clone(),
            role: i.role.clone(),
            expires: i
                .expires_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

fn org_detail(org: &Organization) -> String {
    format!("ID:    {}\nName:  {}", org.id, org.name)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &mut Session,
    args: OrgArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        OrgCommand::Show => {
            let org = session.organization().ok_or(CliError::NoOrganization)?;
            let out = output::render_single(&global.output, org, org_detail, |o| o.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrgCommand::Create { name } => {
            let mut store = OrgStore::new(session.api(), session.notices());
            let org = store.create(&name).await?;
            output::print_output(&org.id.to_string(), global.quiet);
            Ok(())
        }

        OrgCommand::Rename { name } => {
            let org_id = EntityId::from(session.org_id()?);
            let mut store = OrgStore::new(session.api(), session.notices());
            store.rename(&org_id, &name).await?;
            Ok(())
        }

        OrgCommand::Delete { org } => {
            let org_id = match org {
                Some(id) => EntityId::from(id),
                None => EntityId::from(session.org_id()?),
            };
            if !util::confirm(
                &format!("Delete organization '{org_id}'? This cannot be undone."),
                global.yes,
            )? {
                return Ok(());
            }
            let mut store = OrgStore::new(session.api(), session.notices());
            store.delete(&org_id).await?;
            Ok(())
        }

        OrgCommand::Switch { org } => {
            let switched = session.switch_organization(&org).await?;
            if !global.quiet {
                eprintln!("Now in \"{}\"", switched.name);
            }
            Ok(())
        }

        OrgCommand::Members(page) => {
            let mut store = MemberStore::new(session.api(), session.org_id()?, session.notices());
            store
                .load_members(PageQuery::new(page.page, page.page_size))
                .await?;

            let out = output::render_list(
                &global.output,
                store.members().items(),
                |x| MemberRow::from(x),
                |m| m.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            output::print_page_footer(&global.output, store.members().pagination(), global.quiet);
            Ok(())
        }

        OrgCommand::Invitations(page) => {
            let mut store = MemberStore::new(session.api(), session.org_id()?, session.notices());
            store
                .load_invitations(PageQuery::new(page.page, page.page_size))
                .await?;

            let out = output::render_list(
                &global.output,
                store.invitations().items(),
                |x| InvitationRow::from(x),
                |i| i.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            output::print_page_footer(
                &global.output,
                store.invitations().pagination(),
                global.quiet,
            );
            Ok(())
        }

        OrgCommand::Invite { email, role } => {
            let mut store = MemberStore::new(session.api(), session.org_id()?, session.notices());
            store.invite(&email, role.as_deref()).await?;
            Ok(())
        }

        OrgCommand::AcceptInvite { token } => {
            // Joining doesn't need an entered organization
            let org_id = session.org_id().unwrap_or_default();
            let mut store = MemberStore::new(session.api(), org_id, session.notices());
            let org = store.accept_invitation(&token).await?;
            output::print_output(&org.id.to_string(), global.quiet);
            Ok(())
        }

        OrgCommand::UpdateMember {
            member,
            role,
            billable_rate,
        } => {
            let mut store = MemberStore::new(session.api(), session.org_id()?, session.notices());
            store
                .update_member(&EntityId::from(member), role.as_deref(), billable_rate)
                .await?;
            Ok(())
        }

        OrgCommand::DeactivateMember { member } => {
            let mut store = MemberStore::new(session.api(), session.org_id()?, session.notices());
            store.deactivate_member(&EntityId::from(member)).await?;
            Ok(())
        }

        OrgCommand::RemoveMember { member } => {
            if !util::confirm(&format!("Remove member '{member}'?"), global.yes)? {
                return Ok(());
            }
            let mut store = MemberStore::new(session.api(), session.org_id()?, session.notices());
            store.remove_member(&EntityId::from(member)).await?;
            Ok(())
        }

        OrgCommand::RemoveInvitation { invitation } => {
            let mut store = MemberStore::new(session.api(), session.org_id()?, session.notices());
            store.delete_invitation(&EntityId::from(invitation)).await?;
            Ok(())
        }

        OrgCommand::ResendInvitation { invitation } => {
            let mut store = MemberStore::new(session.api(), session.org_id()?, session.notices());
            store.resend_invitation(&EntityId::from(invitation)).await?;
            Ok(())
        }

        OrgCommand::Reinvite { member } => {
            let mut store = MemberStore::new(session.api(), session.org_id()?, session.notices());
            store.reinvite_member(&EntityId::from(member)).await?;
            Ok(())
        }
    }
}
