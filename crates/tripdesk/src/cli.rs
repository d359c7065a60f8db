//! Clap derive structures for the `tripdesk` CLI.
//!
//! Running with no subcommand opens the interactive shell; the
//! subcommands are the scriptable surface over the same data files.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tripdesk_core::ReservationStatus;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// tripdesk -- flight and hotel reservations from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "tripdesk",
    version,
    about = "Book flights and hotels from the command line",
    long_about = "A single-user travel reservation desk.\n\n\
        With no subcommand, opens the interactive menu shell (login,\n\
        booking, admin approval). Subcommands give read-only access to\n\
        the same flat-file records for scripting.",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Option<Command>,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Directory holding the data files (flights.txt, users.json, ...)
    #[arg(long, short = 'd', env = "TRIPDESK_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Output format for list subcommands (falls back to the config
    /// file's `defaults.output`, then `table`)
    #[arg(long, short = 'o', env = "TRIPDESK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one key per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List flights and seat availability
    #[command(alias = "fl")]
    Flights(FlightsArgs),

    /// List hotels and room availability
    #[command(alias = "ho")]
    Hotels(HotelsArgs),

    /// List reservations
    #[command(alias = "res")]
    Reservations(ReservationsArgs),

    /// Write the plain-text reservation report into the data directory
    Report,

    /// Show CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Per-Command Args ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FlightsArgs {
    #[command(subcommand)]
    pub command: FlightsCommand,
}

#[derive(Debug, Subcommand)]
pub enum FlightsCommand {
    /// List all flights with remaining and advertised seats
    #[command(alias = "ls")]
    List,
}

#[derive(Debug, Args)]
pub struct HotelsArgs {
    #[command(subcommand)]
    pub command: HotelsCommand,
}

#[derive(Debug, Subcommand)]
pub enum HotelsCommand {
    /// List all hotels with remaining and advertised rooms
    #[command(alias = "ls")]
    List,
}

#[derive(Debug, Args)]
pub struct ReservationsArgs {
    #[command(subcommand)]
    pub command: ReservationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReservationsCommand {
    /// List reservations, optionally filtered by status
    #[command(alias = "ls")]
    List {
        /// Only show reservations with this status
        #[arg(long, short = 's')]
        status: Option<StatusFilter>,

        /// Only show reservations placed by this user
        #[arg(long, short = 'u')]
        user: Option<String>,
    },
}

/// CLI-friendly spelling of the reservation statuses.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    CancelRequested,
}

impl From<StatusFilter> for ReservationStatus {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Pending => Self::Pending,
            StatusFilter::Approved => Self::Approved,
            StatusFilter::Rejected => Self::Rejected,
            StatusFilter::Cancelled => Self::Cancelled,
            StatusFilter::CancelRequested => Self::CancelRequested,
        }
    }
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration and where it came from
    Show,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
