//! Command-line argument definitions.
//!
//! Argument structs carry the clap derives and convert into the
//! framework-free parameter types of `travellog_core::params`, so the core
//! never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Logbook
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use travellog_core::{
    params::{CreatePlan, Follow},
    DraftId, ImageUpload, Visibility,
};

/// Write, browse and share travel logs.
///
/// Logs belong to travel plans and are written in three steps: pick the plan
/// and images, write the title and content, then choose who can see the log
/// and publish it. Title and content edits are autosaved as drafts.
#[derive(Parser)]
#[command(version, about, name = "tlog")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/travellog/travellog.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Email of the acting user
    #[arg(long, global = true, default_value = "me@localhost")]
    pub email: String,

    /// Display name of the acting user
    #[arg(long, global = true, default_value = "me")]
    pub username: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage travel plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Write and manage your travel logs
    #[command(alias = "l")]
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
    /// Like a log, or take the like back
    Like(IdArgs),
    /// List the logs you liked
    Liked,
    /// Comment on a log
    #[command(alias = "c")]
    Comment(CommentArgs),
    /// Follow another user to see their shared logs
    Follow(FollowArgs),
    /// List logs shared by the users you follow
    Friends,
    /// Inspect autosaved drafts
    #[command(alias = "d")]
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new travel plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all travel plans
    #[command(aliases = ["l", "ls"])]
    List,
}

#[derive(Subcommand)]
pub enum LogCommands {
    /// Write and publish a new log
    #[command(alias = "n")]
    New(NewLogArgs),
    /// Edit one of your published logs
    #[command(alias = "e")]
    Edit(EditLogArgs),
    /// List your logs
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a log with its comments
    #[command(alias = "s")]
    Show(IdArgs),
    /// Delete one of your logs permanently
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

#[derive(Subcommand)]
pub enum DraftCommands {
    /// List stored drafts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a stored draft
    #[command(alias = "s")]
    Show(DraftIdArgs),
    /// Delete a stored draft
    #[command(aliases = ["d", "rm"])]
    Delete(DraftIdArgs),
}

#[derive(clap::Args)]
pub struct CreatePlanArgs {
    /// Title of the trip
    pub title: String,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan { title: val.title }
    }
}

/// A log ID argument shared by several commands.
#[derive(clap::Args)]
pub struct IdArgs {
    /// ID of the log
    pub id: u64,
}

/// Publish a new log by walking the settings, writing and preview steps.
#[derive(clap::Args)]
pub struct NewLogArgs {
    /// Travel plan the log belongs to
    #[arg(long = "plan")]
    pub plan_id: Option<u64>,

    /// Title, at most 100 characters
    #[arg(short, long)]
    pub title: Option<String>,

    /// Body markup
    #[arg(short, long)]
    pub content: Option<String>,

    /// Who can read the log
    #[arg(long, value_enum, default_value_t = VisibilityArg::Private)]
    pub visibility: VisibilityArg,

    /// Attach an image given as NAME:SIZE:MIME, e.g. beach.jpg:120000:image/jpeg
    #[arg(long = "image", value_name = "NAME:SIZE:MIME")]
    pub images: Vec<ImageUpload>,

    /// Start from the stored draft of this plan
    #[arg(long)]
    pub resume: bool,

    /// Autosave delay after the last edit, in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub autosave_ms: u64,
}

/// Edit a published log. Only the given fields change.
#[derive(clap::Args)]
pub struct EditLogArgs {
    /// ID of the log to edit
    pub id: u64,

    /// Move the log to another travel plan
    #[arg(long = "plan")]
    pub plan_id: Option<u64>,

    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub content: Option<String>,

    #[arg(long, value_enum)]
    pub visibility: Option<VisibilityArg>,

    /// Start from the stored draft of this log
    #[arg(long)]
    pub resume: bool,

    /// Autosave delay after the last edit, in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub autosave_ms: u64,
}

impl EditLogArgs {
    /// Human-readable list of the requested changes.
    pub fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(plan_id) = self.plan_id {
            changes.push(format!("Moved to plan {plan_id}"));
        }
        if self.title.is_some() {
            changes.push("Updated title".to_string());
        }
        if self.content.is_some() {
            changes.push("Updated content".to_string());
        }
        if let Some(visibility) = self.visibility {
            changes.push(format!("Visibility set to {visibility}"));
        }
        changes
    }
}

#[derive(clap::Args)]
pub struct CommentArgs {
    /// ID of the log to comment on
    pub log_id: u64,
    /// Comment text
    pub content: String,
}

#[derive(clap::Args)]
pub struct FollowArgs {
    /// Email of the user to follow
    #[arg(id = "followee_email", value_name = "EMAIL")]
    pub email: String,
}

impl From<FollowArgs> for Follow {
    fn from(val: FollowArgs) -> Self {
        Follow { email: val.email }
    }
}

#[derive(clap::Args)]
pub struct DraftIdArgs {
    /// Draft ID, e.g. new-1 or log-4
    pub id: String,
}

impl From<DraftIdArgs> for DraftId {
    fn from(val: DraftIdArgs) -> Self {
        DraftId::new(val.id)
    }
}

/// Command-line spelling of [`Visibility`].
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum VisibilityArg {
    /// Only you
    Private,
    /// Your followers
    Friends,
    /// Everyone
    Public,
}

impl From<VisibilityArg> for Visibility {
    fn from(val: VisibilityArg) -> Self {
        match val {
            VisibilityArg::Private => Visibility::Private,
            VisibilityArg::Friends => Visibility::Friends,
            VisibilityArg::Public => Visibility::Public,
        }
    }
}

impl std::fmt::Display for VisibilityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Visibility::from(*self))
    }
}
