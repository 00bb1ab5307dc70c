//! Clap derive structures for the `sumoly` CLI.
//!
//! Defines the command tree and global flags. Credentials resolve in
//! order: flag > environment > config file > interactive prompt.

use clap::{Args, Parser, Subcommand};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// sumoly -- manage Sumo Logic from the command line
#[derive(Debug, Parser)]
#[command(
    name = "sumoly",
    version,
    about = "Manage Sumo Logic collectors, sources, and keys from the command line",
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
    /// Access id
    #[arg(long, env = "SUMO_ACCESS_ID", global = true)]
    pub access_id: Option<String>,

    /// Access key
    #[arg(long, env = "SUMO_ACCESS_KEY", global = true, hide_env = true)]
    pub access_key: Option<String>,

    /// Regional endpoint (e.g. https://api.us2.sumologic.com/api);
    /// skips the discovery probe when set
    #[arg(long, env = "SUMO_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60, global = true)]
    pub timeout: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage collectors
    Collectors {
        #[command(subcommand)]
        command: CollectorsCmd,
    },
    /// Manage sources on a collector
    Sources {
        #[command(subcommand)]
        command: SourcesCmd,
    },
    /// Inspect access keys
    AccessKeys {
        #[command(subcommand)]
        command: AccessKeysCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum CollectorsCmd {
    /// List collectors
    List {
        /// Filter by kind: hosted, installed, or dead
        #[arg(long)]
        filter: Option<String>,
        #[arg(long)]
        limit: Option<i64>,
        #[arg(long)]
        offset: Option<i64>,
    },
    /// Show one collector by id
    Get { id: i64 },
    /// Show one collector by name
    GetByName { name: String },
    /// Rename a collector
    Rename { id: i64, name: String },
    /// Delete a collector
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum SourcesCmd {
    /// List sources on a collector
    List {
        collector_id: i64,
        /// Emit the registration-ready JSON array form
        #[arg(long)]
        download: bool,
    },
    /// Show one source
    Get { collector_id: i64, source_id: i64 },
    /// Delete a source
    Delete { collector_id: i64, source_id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum AccessKeysCmd {
    /// List the organization's access keys
    List {
        #[arg(long)]
        limit: Option<i64>,
        /// Continuation token from a previous page
        #[arg(long)]
        token: Option<String>,
    },
    /// List your own access keys
    Personal,
}
