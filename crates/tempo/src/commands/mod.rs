//! Command dispatch: bridges CLI args -> core stores -> output formatting.

pub mod auth;
pub mod clients;
pub mod config_cmd;
pub mod entries;
pub mod members;
pub mod org;
pub mod projects;
pub mod tags;
pub mod tasks;
pub mod timer;
pub mod util;

use tempo_core::{NoticeSender, Session};

use crate::cli::{Command, GlobalOpts, OrgCommand};
use crate::config::resolve_client_config;
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
///
/// Builds the session (connect, authenticate, enter the organization
/// where the command needs one) and hands it to the handler.
pub async fn dispatch(
    cmd: Command,
    notices: NoticeSender,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Account commands prompt for credentials and build their own session
    let cmd = match cmd {
        Command::Auth(args) => return auth::handle(args, notices, global).await,
        other => other,
    };

    let config = resolve_client_config(global)?;
    let mut session = Session::connect(&config, notices)?;
    session.authenticate().await?;

    if needs_org(&cmd) {
        session.enter_organization().await?;
    }

    match cmd {
        Command::Org(args) => org::handle(&mut session, args, global).await,
        Command::Clients(args) => clients::handle(&mut session, args, global).await,
        Command::Projects(args) => projects::handle(&mut session, args, global).await,
        Command::Tasks(args) => tasks::handle(&mut session, args, global).await,
        Command::Members(args) => members::handle(&mut session, args, global).await,
        Command::Timer(args) => timer::handle(&mut session, args, global).await,
        Command::Entries(args) => entries::handle(&mut session, args, global).await,
        Command::Tags => tags::handle(&mut session, global).await,
        // Auth, Config, and Completions are handled before dispatch
        Command::Auth(_) | Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}

/// Whether the command operates inside an organization.
fn needs_org(cmd: &Command) -> bool {
    match cmd {
        Command::Auth(_) | Command::Config(_) | Command::Completions(_) => false,
        // Creating, joining, or switching organizations works without one
        Command::Org(args) => !matches!(
            args.command,
            OrgCommand::Create { .. } | OrgCommand::AcceptInvite { .. } | OrgCommand::Switch { .. }
        ),
        _ => true,
    }
}
