//! Command-line surface of the console.
//!
//! Pure argument definitions; the matching runners live in
//! [`crate::commands`]. Tri-state booleans are `Option<bool>` so operators
//! pass explicit values (`--open false`), while one-way switches like
//! `--force` stay plain flags.

use clap::{Args, Parser, Subcommand};

use crate::config;
use crate::types::Batch;

#[derive(Parser, Debug)]
#[command(name = "eventdesk", version, about = "Admin console for the event platform")]
pub struct Cli {
    /// Base URL of the platform API.
    #[arg(long, env = "EVENTDESK_API_URL", default_value = config::DEFAULT_API_URL)]
    pub server: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and save the session.
    Login(LoginArgs),
    /// Drop the saved session.
    Logout,
    /// Show the admin the current session belongs to.
    Whoami,
    /// Manage events.
    Event(EventCommand),
    /// Manage notifications.
    Notification(NotificationCommand),
    /// Manage member records.
    Member(MemberCommand),
    /// Server-computed reports.
    Report(ReportCommand),
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    /// Prompted for (hidden) when omitted.
    #[arg(long)]
    pub password: Option<String>,
}

// =============================================================================
// EVENTS
// =============================================================================

#[derive(Args, Debug)]
pub struct EventCommand {
    #[command(subcommand)]
    pub command: EventSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EventSubcommand {
    /// List all events.
    List,
    /// Show one event.
    Get { id: String },
    /// Create an event.
    Create(EventCreateArgs),
    /// Edit fields of an existing event.
    Update(EventUpdateArgs),
    /// Delete an event.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct EventCreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub image_link: String,

    #[arg(long)]
    pub date: String,

    #[arg(long)]
    pub pdf_link: String,

    /// Whether registration starts open. Defaults to true.
    #[arg(long)]
    pub open: Option<bool>,

    #[arg(long)]
    pub prize: String,

    #[arg(long)]
    pub location: String,

    #[arg(long)]
    pub description: String,
}

#[derive(Args, Debug)]
pub struct EventUpdateArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub image_link: Option<String>,

    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub pdf_link: Option<String>,

    #[arg(long)]
    pub open: Option<bool>,

    #[arg(long)]
    pub result_announced: Option<bool>,

    /// Repeat to set the full winner list; replaces the previous list.
    #[arg(long = "winner")]
    pub winners: Vec<String>,

    #[arg(long)]
    pub prize: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

#[derive(Args, Debug)]
pub struct NotificationCommand {
    #[command(subcommand)]
    pub command: NotificationSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NotificationSubcommand {
    /// List all notifications.
    List,
    /// Show one notification.
    Get { id: String },
    /// Publish a notification.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// Edit fields of an existing notification.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a notification.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

// =============================================================================
// MEMBERS
// =============================================================================

#[derive(Args, Debug)]
pub struct MemberCommand {
    #[command(subcommand)]
    pub command: MemberSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MemberSubcommand {
    /// List all members.
    List,
    /// Show one member.
    Get { id: String },
    /// Register a member record.
    Create(MemberCreateArgs),
    /// Edit fields of an existing member.
    Update(MemberUpdateArgs),
    /// Delete a member record.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct MemberCreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Initial password; the server applies its own default when omitted.
    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub branch: String,

    #[arg(long, value_enum)]
    pub batch: Batch,

    #[arg(long)]
    pub regno: u32,

    #[arg(long)]
    pub mobileno: u64,

    /// Whether the member starts verified. Defaults to false.
    #[arg(long)]
    pub verified: Option<bool>,
}

#[derive(Args, Debug)]
pub struct MemberUpdateArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// New password; the current one is kept when omitted.
    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub branch: Option<String>,

    #[arg(long, value_enum)]
    pub batch: Option<Batch>,

    #[arg(long)]
    pub regno: Option<u32>,

    #[arg(long)]
    pub mobileno: Option<u64>,

    #[arg(long)]
    pub verified: Option<bool>,
}

// =============================================================================
// REPORTS
// =============================================================================

#[derive(Args, Debug)]
pub struct ReportCommand {
    #[command(subcommand)]
    pub command: ReportSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReportSubcommand {
    /// Headline totals for users, events, and notifications.
    Stats,
    /// Events created per month.
    EventsTrend,
    /// Member registrations per month.
    UsersTrend,
    /// Member distribution across branches.
    Branches,
    /// Member distribution across batches.
    Batches,
    /// All five reports, fetched concurrently.
    Summary,
}
