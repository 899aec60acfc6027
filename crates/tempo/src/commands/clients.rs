//! Client (customer) command handlers.

use tabled::Tabled;

use tempo_core::{Client, ClientStore, EntityId, ListScope, PageQuery, Session};

use crate::cli::{ClientsArgs, ClientsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Archived")]
    archived: String,
}

impl From<&Client> for ClientRow {
    fn from(c: &Client) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            archived: c
                .archived_at
                .map(|t| t.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &mut Session,
    args: ClientsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut store = ClientStore::new(session.api(), session.org_id()?, session.notices());

    match args.command {
        ClientsCommand::List { page, archived } => {
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
            let out = output::render_list(&global.output, list.items(), |x| ClientRow::from(x), |c| {
                c.id.to_string()
            });
            output::print_output(&out, global.quiet);
            output::print_page_footer(&global.output, list.pagination(), global.quiet);
            Ok(())
        }

        ClientsCommand::Create { name } => {
            let client = store.create(&name).await?;
            output::print_output(&client.id.to_string(), global.quiet);
            Ok(())
        }

        ClientsCommand::Rename { id, name } => {
            store.edit(&EntityId::from(id), &name).await?;
            Ok(())
        }

        ClientsCommand::Archive { id } => {
            store.archive(&EntityId::from(id)).await?;
            Ok(())
        }

        ClientsCommand::Unarchive { id } => {
            store.unarchive(&EntityId::from(id)).await?;
            Ok(())
        }

        ClientsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Delete client '{id}'? This cannot be undone."),
                global.yes,
            )? {
                return Ok(());
            }
            store.delete(&EntityId::from(id)).await?;
            Ok(())
        }
    }
}
