//! Task command handlers.

use tabled::Tabled;

use tempo_core::{EntityId, Session, Task, TaskDraft, TaskPatch, TaskStatus, TaskStore};

use crate::cli::{GlobalOpts, TasksArgs, TasksCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Estimate")]
    estimate: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

impl From<&&Task> for TaskRow {
    fn from(t: &&Task) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
            status: t.status.to_string(),
            spent: t
                .spent_time
                .map(|h| format!("{h:.1}h"))
                .unwrap_or_default(),
            estimate: t
                .estimated_time
                .map(|h| format!("{h:.1}h"))
                .unwrap_or_default(),
            progress: match t.progress_percent() {
                0 => String::new(),
                pct => format!("{pct}%"),
            },
        }
    }
}

fn require_project(args: &TasksArgs) -> Result<EntityId, CliError> {
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
    args: TasksArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let project_id = require_project(&args)?;
    let mut store = TaskStore::new(
        session.api(),
        session.org_id()?,
        project_id,
        session.notices(),
    );

    match args.command {
        TasksCommand::List => {
            store.load().await?;

            // Active tasks first, done tasks after
            let (active, done) = store.partitions();
            let ordered: Vec<&Task> = active.into_iter().chain(done).collect();
            let out = output::render_list(&global.output, &ordered, |x| TaskRow::from(x), |t| {
                t.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        TasksCommand::Create { name, estimate } => {
            let task = store
                .create(&TaskDraft {
                    name,
                    estimated_time: estimate,
                })
                .await?;
            output::print_output(&task.id.to_string(), global.quiet);
            Ok(())
        }

        TasksCommand::Update { id, name, estimate } => {
            store
                .update(
                    &EntityId::from(id),
                    &TaskPatch {
                        name,
                        estimated_time: estimate,
                    },
                )
                .await?;
            Ok(())
        }

        TasksCommand::Done { id } => {
            store
                .set_status(&EntityId::from(id), TaskStatus::Done)
                .await?;
            Ok(())
        }

        TasksCommand::Reopen { id } => {
            store
                .set_status(&EntityId::from(id), TaskStatus::Active)
                .await?;
            Ok(())
        }

        TasksCommand::Delete { id } => {
            store.delete(&EntityId::from(id)).await?;
            Ok(())
        }
    }
}
