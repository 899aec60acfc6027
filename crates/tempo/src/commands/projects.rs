//! Project command handlers.

use tabled::Tabled;

use tempo_core::{
    Client, EntityId, ListScope, PageQuery, Project, ProjectDraft, ProjectStore, Session,
};

use crate::cli::{GlobalOpts, ProjectsArgs, ProjectsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Billable")]
    billable: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Estimate")]
    estimate: String,
    #[tabled(rename = "Client")]
    client: String,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            billable: if p.billable { "yes" } else { "no" }.into(),
            rate: p
                .billable_rate
                .map(|r| format!("{r:.2}"))
                .unwrap_or_default(),
            estimate: p
                .estimated_time
                .map(|h| format!("{h:.1}h"))
                .unwrap_or_default(),
            client: p
                .client_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct AssignableClientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Client> for AssignableClientRow {
    fn from(c: &Client) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
        }
    }
}

fn detail(p: &Project) -> String {
    let mut lines = vec![
        format!("ID:        {}", p.id),
        format!("Name:      {}", p.name),
        format!("Color:     {}", util::dash(p.color.as_deref())),
        format!("Billable:  {}", p.billable),
        format!(
            "Rate:      {}",
            p.billable_rate
                .map_or_else(|| "-".into(), |r| format!("{r:.2}"))
        ),
        format!("Estimate:  {}", util::hours(p.estimated_time)),
    ];
    if let Some(ref client) = p.client_id {
        lines.push(format!("Client:    {client}"));
    }
    if let Some(archived) = p.archived_at {
        lines.push(format!("Archived:  {}", archived.format("%Y-%m-%d")));
    }
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &mut Session,
    args: ProjectsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut store = ProjectStore::new(session.api(), session.org_id()?, session.notices());

    match args.command {
        ProjectsCommand::List { page, archived } => {
            let scope = if archived {
                ListScope::Archived
            } else {
                ListScope::Active
            };
            store
                .load(scope, PageQuery::new(page.page, page.page_size))
                .await?;

            let list = match scope {
                ListScope::Active => store.active(),
                ListScope::Archived => store.archived(),
            };
            let out = output::render_list(&global.output, list.items(), |x| ProjectRow::from(x), |p| {
                p.id.to_string()
            });
            output::print_output(&out, global.quiet);
            output::print_page_footer(&global.output, list.pagination(), global.quiet);
            Ok(())
        }

        ProjectsCommand::Get { id } => {
            let project = store.get(&EntityId::from(id)).await?;
            let out = output::render_single(&global.output, &project, detail, |p| {
                p.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProjectsCommand::Create {
            name,
            color,
            billable,
            billable_rate,
            estimate,
            client,
        } => {
            let draft = ProjectDraft {
                name,
                color,
                billable: Some(billable),
                billable_rate,
                estimated_time: estimate,
                client_id: client,
            };
            let project = store.create(&draft).await?;
            output::print_output(&project.id.to_string(), global.quiet);
            Ok(())
        }

        ProjectsCommand::Update {
            id,
            name,
            color,
            billable,
            billable_rate,
            estimate,
            client,
        } => {
            // The endpoint replaces the record, so start from the
            // current one and overlay the given flags.
            let id = EntityId::from(id);
            let current = store.get(&id).await?;
            let draft = ProjectDraft {
                name: name.unwrap_or(current.name),
                color: color.or(current.color),
                billable: Some(billable.unwrap_or(current.billable)),
                billable_rate: billable_rate.or(current.billable_rate),
                estimated_time: estimate.or(current.estimated_time),
                client_id: client.or_else(|| current.client_id.map(|c| c.to_string())),
            };
            store.update(&id, &draft).await?;
            Ok(())
        }

        ProjectsCommand::Archive { id } => {
            store.archive(&EntityId::from(id)).await?;
            Ok(())
        }

        ProjectsCommand::Unarchive { id } => {
            store.unarchive(&EntityId::from(id)).await?;
            Ok(())
        }

        ProjectsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete project '{id}'? This cannot be undone."),
                global.yes,
            )? {
                return Ok(());
            }
            store.delete(&EntityId::from(id)).await?;
            Ok(())
        }

        ProjectsCommand::Clients => {
            let clients = store.assignable_clients().await?;
            let out = output::render_list(
                &global.output,
                &clients,
                |x| AssignableClientRow::from(x),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
