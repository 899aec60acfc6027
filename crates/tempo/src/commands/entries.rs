//! Time-entry command handlers.

use chrono::{DateTime, Local, Utc};
use tabled::Tabled;

use tempo_core::{
    EntityId, PageQuery, ProjectWithTasks, Session, TimeEntry, TimeEntryDraft, TimeEntryUpdates,
    TimeStore,
};

use crate::cli::{EntriesArgs, EntriesCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Billable")]
    billable: String,
}

impl From<&TimeEntry> for EntryRow {
    fn from(e: &TimeEntry) -> Self {
        Self {
            id: e.id.to_string(),
            start: e.start.format("%H:%M").to_string(),
            end: e
                .end
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_else(|| "running".into()),
            duration: e
                .duration()
                .map(|d| {
                    let secs = d.num_seconds().max(0);
                    format!("{:02}:{:02}", secs / 3600, secs % 3600 / 60)
                })
                .unwrap_or_default(),
            description: e.description.clone().unwrap_or_default(),
            billable: if e.billable { "yes" } else { "" }.into(),
        }
    }
}

#[derive(Tabled)]
struct PickerRow {
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Task ID")]
    task_id: String,
}

fn picker_rows(projects: &[ProjectWithTasks]) -> Vec<PickerRow> {
    let mut rows = Vec::new();
    for project in projects {
        if project.tasks.is_empty() {
            rows.push(PickerRow {
                project: project.name.clone(),
                task: String::new(),
                task_id: String::new(),
            });
        }
        for task in &project.tasks {
            rows.push(PickerRow {
                project: project.name.clone(),
                task: task.name.clone(),
                task_id: task.id.to_string(),
            });
        }
    }
    rows
}

fn parse_instant(field: &str, value: &str) -> Result<DateTime<Utc>, CliError> {
    value.parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("not an RFC 3339 timestamp: {value}"),
    })
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    session: &mut Session,
    args: EntriesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut store = TimeStore::new(
        session.api(),
        session.org_id()?,
        session.notices(),
        session.timer(),
        Local::now().date_naive(),
    );

    match args.command {
        EntriesCommand::List { page, date } => {
            if let Some(date) = date {
                store.set_date(date);
            }
            store
                .load_entries(PageQuery::new(page.page, page.page_size))
                .await?;

            let out = output::render_list(
                &global.output,
                store.entries().items(),
                |x| EntryRow::from(x),
                |e| e.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            output::print_page_footer(&global.output, store.entries().pagination(), global.quiet);
            Ok(())
        }

        EntriesCommand::Create {
            start,
            end,
            description,
            project,
            task,
            billable,
            tags,
        } => {
            let draft = TimeEntryDraft {
                description,
                start: parse_instant("start", &start)?,
                end: parse_instant("end", &end)?,
                project_id: project,
                task_id: task,
                billable,
                tag_ids: tags,
            };
            let entry = store.create(&draft).await?;
            output::print_output(&entry.id.to_string(), global.quiet);
            Ok(())
        }

        EntriesCommand::Update {
            id,
            start,
            end,
            description,
            project,
            task,
            billable,
            tags,
        } => {
            let draft = TimeEntryDraft {
                description,
                start: parse_instant("start", &start)?,
                end: parse_instant("end", &end)?,
                project_id: project,
                task_id: task,
                billable,
                tag_ids: tags,
            };
            store.update(&EntityId::from(id), &draft).await?;
            Ok(())
        }

        EntriesCommand::Delete { id } => {
            store.delete(&EntityId::from(id)).await?;
            Ok(())
        }

        EntriesCommand::BulkUpdate {
            ids,
            description,
            project,
            task,
            billable,
        } => {
            let ids: Vec<EntityId> = ids.into_iter().map(EntityId::from).collect();
            let updates = TimeEntryUpdates {
                description,
                project_id: project,
                task_id: task,
                billable,
                tag_ids: None,
            };
            store.bulk_update(&ids, &updates).await?;
            Ok(())
        }

        EntriesCommand::BulkDelete { ids } => {
            if !util::confirm(
                &format!("Delete {} time entries? This cannot be undone.", ids.len()),
                global.yes,
            )? {
                return Ok(());
            }
            let ids: Vec<EntityId> = ids.into_iter().map(EntityId::from).collect();
            store.bulk_delete(&ids).await?;
            Ok(())
        }

        EntriesCommand::Pickers => {
            store.load_projects_with_tasks().await?;
            let projects = store.projects_with_tasks();

            // Table flattens to one row per task; structured formats
            // keep the nested shape.
            let out = match global.output {
                OutputFormat::Table => {
                    tabled::Table::new(picker_rows(projects))
                        .with(tabled::settings::Style::rounded())
                        .to_string()
                }
                OutputFormat::Json => output::render_json_pretty(projects),
                OutputFormat::JsonCompact => output::render_json_compact(projects),
                OutputFormat::Yaml => output::render_yaml(projects),
                OutputFormat::Plain => projects
                    .iter()
                    .map(|p| p.id.to_string())
                    .collect::<Vec<_>>()
                    .join("\n"),
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
