//! Timer command handlers.

use chrono::{Local, Utc};

use tempo_core::{Session, TimeEntry, TimeStore, TimerStart};

use crate::cli::{GlobalOpts, TimerArgs, TimerCommand};
use crate::error::CliError;
use crate::output;

use super::util;

fn format_elapsed(entry: &TimeEntry) -> String {
    let elapsed = entry
        .duration()
        .unwrap_or_else(|| Utc::now() - entry.start);
    let secs = elapsed.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}

fn detail(entry: &TimeEntry) -> String {
    let mut lines = vec![
        format!("ID:           {}", entry.id),
        format!(
            "Description:  {}",
            util::dash(entry.description.as_deref())
        ),
        format!("Started:      {}", entry.start.format("%Y-%m-%d %H:%M:%S")),
        format!("Elapsed:      {}", format_elapsed(entry)),
        format!("Billable:     {}", entry.billable),
    ];
    if let Some(ref project) = entry.project_id {
        lines.push(format!("Project:      {project}"));
    }
    if let Some(ref task) = entry.task_id {
        lines.push(format!("Task:         {task}"));
    }
    lines.join("\n")
}

pub async fn handle(
    session: &mut Session,
    args: TimerArgs,
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
        TimerCommand::Status => {
            // The slot was seeded when the organization was entered
            match session.timer().current() {
                Some(entry) => {
                    let out = output::render_single(&global.output, &entry, detail, |e| {
                        e.id.to_string()
                    });
                    output::print_output(&out, global.quiet);
                }
                None => {
                    if !global.quiet {
                        eprintln!("No timer running");
                    }
                }
            }
            Ok(())
        }

        TimerCommand::Start {
            description,
            project,
            task,
            client,
            billable,
            tags,
        } => {
            let entry = store
                .start_timer(&TimerStart {
                    description,
                    project_id: project,
                    task_id: task,
                    client_id: client,
                    billable: billable.then_some(true),
                    tag_ids: tags,
                })
                .await?;
            output::print_output(&entry.id.to_string(), global.quiet);
            Ok(())
        }

        TimerCommand::Stop => {
            let entry = store.stop_timer().await?;
            if !global.quiet {
                eprintln!("Tracked {}", format_elapsed(&entry));
            }
            Ok(())
        }
    }
}
