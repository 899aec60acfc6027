//! Project-membership command handlers.

use tabled::Tabled;

use tempo_core::{EntityId, Member, MemberStore, ProjectMember, Session};

use crate::cli::{GlobalOpts, MembersArgs, MembersCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProjectMemberRow {
    #[tabled(rename = "Member")]
    member_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

impl From<&ProjectMember> for ProjectMemberRow {
    fn from(m: &ProjectMember) -> Self {
        Self {
            member_id: m.member_id.to_string(),
            name: m.name.clone().unwrap_or_default(),
            email: m.email.clone().unwrap_or_default(),
            rate: m
                .billable_rate
                .map(|r| format!("{r:.2}"))
                .unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct EligibleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
}

impl From<&Member> for EligibleRow {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.clone(),
            email: m.email.clone(),
        }
    }
}

fn require_project(args: &MembersArgs) -> Result<EntityId, CliError> {
    args.project
        .as_deref()
        .map(EntityId::from)
        .ok_or_else(|| CliError::Validation {
            field: "project".into(),
            reason: "required; pass --project <id>".into(),
        })
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &mut Session,
    args: MembersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let project_id = require_project(&args)?;
    let mut store = MemberStore::new(session.api(), session.org_id()?, session.notices());

    match args.command {
        MembersCommand::List => {
            store.load_project_members(&project_id).await?;
            let out = output::render_list(
                &global.output,
                store.project_members(),
                |x| ProjectMemberRow::from(x),
                |m| m.member_id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        MembersCommand::Add { member, rate } => {
            store
                .add_project_member(&project_id, &EntityId::from(member), rate)
                .await?;
            Ok(())
        }

        MembersCommand::Update { member, rate } => {
            store
                .update_project_member(&project_id, &EntityId::from(member), rate)
                .await?;
            Ok(())
        }

        MembersCommand::Remove { member } => {
            if !util::confirm(
                &format!("Remove member '{member}' from the project?"),
                global.yes,
            )? {
                return Ok(());
            }
            store
                .remove_project_member(&project_id, &EntityId::from(member))
                .await?;
            Ok(())
        }

        MembersCommand::Eligible => {
            let members = store.eligible_members(&project_id).await?;
            let out = output::render_list(&global.output, &members, |x| EligibleRow::from(x), |m| {
                m.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
