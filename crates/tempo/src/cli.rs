//! Clap derive structures for the `tempo` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// tempo -- track time from the command line
#[derive(Debug, Parser)]
#[command(
    name = "tempo",
    version,
    about = "Track time against projects, tasks, and clients",
    long_about = "A command-line client for Tempo time-tracking servers.\n\n\
        Works against any organization you belong to; switch with `tempo org switch`.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "TEMPO_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Server URL (overrides profile)
    #[arg(long, short = 's', env = "TEMPO_SERVER", global = true)]
    pub server: Option<String>,

    /// Organization id (overrides profile and account default)
    #[arg(long, env = "TEMPO_ORG", global = true)]
    pub organization: Option<String>,

    /// Access token
    #[arg(long, env = "TEMPO_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "TEMPO_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "TEMPO_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: 30, or the profile's value]
    #[arg(long, env = "TEMPO_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in, register, inspect the account
    Auth(AuthArgs),

    /// Manage the organization and its membership
    Org(OrgArgs),

    /// Manage billing clients
    #[command(alias = "cl")]
    Clients(ClientsArgs),

    /// Manage projects
    #[command(alias = "proj")]
    Projects(ProjectsArgs),

    /// Manage tasks within a project
    Tasks(TasksArgs),

    /// Manage members assigned to a project
    Members(MembersArgs),

    /// Start, stop, and inspect the running timer
    #[command(alias = "t")]
    Timer(TimerArgs),

    /// Manage time entries
    #[command(alias = "e")]
    Entries(EntriesArgs),

    /// List tags
    Tags,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Pagination arguments shared by all paginated list commands.
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page
    #[arg(long, short = 'l', default_value = "25")]
    pub page_size: u32,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  AUTH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in with email + password and verify the session
    Login {
        /// Account email (prompted if omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Register a new account
    Register {
        /// Display name
        #[arg(long, required = true)]
        name: String,

        /// Account email
        #[arg(long, required = true)]
        email: String,
    },

    /// Show the authenticated account
    Whoami,

    /// Drop the local session
    Logout,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ORG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct OrgArgs {
    #[command(subcommand)]
    pub command: OrgCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrgCommand {
    /// Show the active organization
    Show,

    /// Create a new organization
    Create {
        /// Organization name
        name: String,
    },

    /// Rename the active organization
    Rename {
        /// New name
        name: String,
    },

    /// Delete an organization
    Delete {
        /// Organization id (defaults to the active one)
        org: Option<String>,
    },

    /// Switch the account's active organization
    Switch {
        /// Organization id
        org: String,
    },

    /// List organization members
    #[command(alias = "ls-members")]
    Members(PageArgs),

    /// List outstanding invitations
    Invitations(PageArgs),

    /// Invite someone by email
    Invite {
        /// Email address to invite
        email: String,

        /// Role to grant
        #[arg(long)]
        role: Option<String>,
    },

    /// Accept an invitation by its emailed token
    AcceptInvite {
        /// Invitation token
        token: String,
    },

    /// Update a member's role or billable rate
    UpdateMember {
        /// Member id
        member: String,

        /// New role
        #[arg(long)]
        role: Option<String>,

        /// New billable rate (omit to clear)
        #[arg(long)]
        billable_rate: Option<f64>,
    },

    /// Deactivate a member
    DeactivateMember {
        /// Member id
        member: String,
    },

    /// Remove a member from the organization
    RemoveMember {
        /// Member id
        member: String,
    },

    /// Withdraw an invitation
    RemoveInvitation {
        /// Invitation id
        invitation: String,
    },

    /// Resend an invitation email
    ResendInvitation {
        /// Invitation id
        invitation: String,
    },

    /// Re-invite a deactivated member
    Reinvite {
        /// Member id
        member: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CLIENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ClientsArgs {
    #[command(subcommand)]
    pub command: ClientsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClientsCommand {
    /// List clients
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Show archived clients instead of active ones
        #[arg(long)]
        archived: bool,
    },

    /// Create a client
    Create {
        /// Client name
        name: String,
    },

    /// Rename a client
    Rename {
        /// Client id
        id: String,

        /// New name
        name: String,
    },

    /// Archive a client
    Archive {
        /// Client id
        id: String,
    },

    /// Restore an archived client
    Unarchive {
        /// Client id
        id: String,
    },

    /// Delete a client
    Delete {
        /// Client id
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PROJECTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    #[command(subcommand)]
    pub command: ProjectsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProjectsCommand {
    /// List projects
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Show archived projects instead of active ones
        #[arg(long)]
        archived: bool,
    },

    /// Get project details
    Get {
        /// Project id
        id: String,
    },

    /// Create a project
    Create {
        /// Project name
        name: String,

        /// Display color (hex)
        #[arg(long)]
        color: Option<String>,

        /// Mark the project billable
        #[arg(long)]
        billable: bool,

        /// Hourly billable rate
        #[arg(long)]
        billable_rate: Option<f64>,

        /// Estimated effort in hours
        #[arg(long)]
        estimate: Option<f64>,

        /// Client id to attach
        #[arg(long)]
        client: Option<String>,
    },

    /// Update a project
    Update {
        /// Project id
        id: String,

        /// Project name
        #[arg(long)]
        name: Option<String>,

        /// Display color (hex)
        #[arg(long)]
        color: Option<String>,

        /// Billable flag
        #[arg(long, action = clap::ArgAction::Set)]
        billable: Option<bool>,

        /// Hourly billable rate (omit to clear)
        #[arg(long)]
        billable_rate: Option<f64>,

        /// Estimated effort in hours
        #[arg(long)]
        estimate: Option<f64>,

        /// Client id to attach (omit to detach)
        #[arg(long)]
        client: Option<String>,
    },

    /// Archive a project
    Archive {
        /// Project id
        id: String,
    },

    /// Restore an archived project
    Unarchive {
        /// Project id
        id: String,
    },

    /// Delete a project
    Delete {
        /// Project id
        id: String,
    },

    /// List clients available for assignment
    Clients,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TASKS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Project id the tasks belong to
    #[arg(long, short = 'P', global = true)]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: TasksCommand,
}

#[derive(Debug, Subcommand)]
pub enum TasksCommand {
    /// List tasks, split into active and done
    #[command(alias = "ls")]
    List,

    /// Create a task
    Create {
        /// Task name
        name: String,

        /// Estimated effort in hours
        #[arg(long)]
        estimate: Option<f64>,
    },

    /// Update a task's name or estimate
    Update {
        /// Task id
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// Estimated effort in hours
        #[arg(long)]
        estimate: Option<f64>,
    },

    /// Mark a task done
    Done {
        /// Task id
        id: String,
    },

    /// Reopen a done task
    Reopen {
        /// Task id
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MEMBERS (project members)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MembersArgs {
    /// Project id
    #[arg(long, short = 'P', global = true)]
    pub project: Option<String>,

    #[command(subcommand)]
    pub command: MembersCommand,
}

#[derive(Debug, Subcommand)]
pub enum MembersCommand {
    /// List members of the project
    #[command(alias = "ls")]
    List,

    /// Add an organization member to the project
    Add {
        /// Member id
        member: String,

        /// Project-specific billable rate
        #[arg(long)]
        rate: Option<f64>,
    },

    /// Update a project member's billable rate
    Update {
        /// Member id
        member: String,

        /// Project-specific billable rate (omit to clear)
        #[arg(long)]
        rate: Option<f64>,
    },

    /// Remove a member from the project
    Remove {
        /// Member id
        member: String,
    },

    /// List organization members eligible to join
    Eligible,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TIMER
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TimerArgs {
    #[command(subcommand)]
    pub command: TimerCommand,
}

#[derive(Debug, Subcommand)]
pub enum TimerCommand {
    /// Show the running timer, if any
    Status,

    /// Start a timer
    Start {
        /// What you're working on
        #[arg(long, short = 'm')]
        description: Option<String>,

        /// Project id
        #[arg(long)]
        project: Option<String>,

        /// Task id
        #[arg(long)]
        task: Option<String>,

        /// Client id
        #[arg(long)]
        client: Option<String>,

        /// Mark the entry billable
        #[arg(long)]
        billable: bool,

        /// Tag ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },

    /// Stop the running timer
    Stop,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ENTRIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct EntriesArgs {
    #[command(subcommand)]
    pub command: EntriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum EntriesCommand {
    /// List time entries for a day
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Day to list (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Create a completed time entry
    Create {
        /// Start time (RFC 3339, e.g. 2026-03-01T09:00:00Z)
        #[arg(long)]
        start: String,

        /// End time (RFC 3339)
        #[arg(long)]
        end: String,

        /// Description
        #[arg(long, short = 'm')]
        description: Option<String>,

        /// Project id
        #[arg(long)]
        project: Option<String>,

        /// Task id
        #[arg(long)]
        task: Option<String>,

        /// Mark the entry billable
        #[arg(long)]
        billable: bool,

        /// Tag ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },

    /// Update a time entry
    Update {
        /// Entry id
        id: String,

        /// Start time (RFC 3339)
        #[arg(long)]
        start: String,

        /// End time (RFC 3339)
        #[arg(long)]
        end: String,

        /// Description
        #[arg(long, short = 'm')]
        description: Option<String>,

        /// Project id
        #[arg(long)]
        project: Option<String>,

        /// Task id
        #[arg(long)]
        task: Option<String>,

        /// Billable flag
        #[arg(long, action = clap::ArgAction::Set, default_value = "false")]
        billable: bool,

        /// Tag ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },

    /// Delete a time entry
    Delete {
        /// Entry id
        id: String,
    },

    /// Apply the same updates to several entries
    BulkUpdate {
        /// Entry ids (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,

        /// Description
        #[arg(long, short = 'm')]
        description: Option<String>,

        /// Project id
        #[arg(long)]
        project: Option<String>,

        /// Task id
        #[arg(long)]
        task: Option<String>,

        /// Billable flag
        #[arg(long, action = clap::ArgAction::Set, default_value = "false")]
        billable: bool,
    },

    /// Delete several entries at once
    BulkDelete {
        /// Entry ids (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
    },

    /// List projects with their tasks (picker data)
    Pickers,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Print the config file path
    Path,

    /// Display current resolved configuration
    Show,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store an access token in the system keyring
    SetToken {
        /// Profile name (default profile if omitted)
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
