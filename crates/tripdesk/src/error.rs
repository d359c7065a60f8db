//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help
//! text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use tripdesk_core::CoreError;

/// Exit codes for scripting against the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 5;
    pub const UNAVAILABLE: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(tripdesk::not_found),
        help("Run: tripdesk {list_command} to see what is on file")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{resource_type} '{identifier}' already exists")]
    #[diagnostic(code(tripdesk::conflict))]
    Conflict {
        resource_type: String,
        identifier: String,
    },

    // ── Booking ──────────────────────────────────────────────────────
    #[error("{what} is fully booked")]
    #[diagnostic(
        code(tripdesk::fully_booked),
        help("Approved bookings already consume every seat/room. Pick another option.")
    )]
    FullyBooked { what: String },

    #[error("{message}")]
    #[diagnostic(
        code(tripdesk::invalid_transition),
        help("Check the reservation's current status with: tripdesk reservations list")
    )]
    InvalidTransition { message: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Login failed: invalid username or password")]
    #[diagnostic(code(tripdesk::auth_failed))]
    AuthFailed,

    #[error("Access denied: this account cannot use that login")]
    #[diagnostic(
        code(tripdesk::wrong_role),
        help("Admins use 'Admin login', travelers use 'Traveler login'.")
    )]
    WrongRole,

    // ── Data files ───────────────────────────────────────────────────
    #[error("Data file problem: {message}")]
    #[diagnostic(
        code(tripdesk::data_file),
        help("The data files live in {dir}. Fix or remove the offending file and retry.")
    )]
    DataFile { message: String, dir: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(tripdesk::config))]
    Config(Box<figment::Error>),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Prompt failed")]
    #[diagnostic(code(tripdesk::prompt))]
    Prompt(#[from] dialoguer::Error),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    #[diagnostic(code(tripdesk::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::FullyBooked { .. } => exit_code::UNAVAILABLE,
            Self::AuthFailed | Self::WrongRole => exit_code::AUTH,
            Self::InvalidTransition { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

/// Wrap a `CoreError` with the data directory it arose from, so file
/// errors can point somewhere concrete.
pub fn from_core(err: CoreError, data_dir: &std::path::Path) -> CliError {
    let dir = data_dir.display().to_string();
    match err {
        CoreError::FlightNotFound { number } => CliError::NotFound {
            resource_type: "flight".into(),
            identifier: number.to_string(),
            list_command: "flights list".into(),
        },
        CoreError::HotelNotFound { id } => CliError::NotFound {
            resource_type: "hotel".into(),
            identifier: id.to_string(),
            list_command: "hotels list".into(),
        },
        CoreError::UserNotFound { username } => CliError::NotFound {
            resource_type: "user".into(),
            identifier: username,
            list_command: "reservations list".into(),
        },
        CoreError::ReservationNotFound { id } => CliError::NotFound {
            resource_type: "reservation".into(),
            identifier: id.to_string(),
            list_command: "reservations list".into(),
        },

        CoreError::DuplicateFlight { number } => CliError::Conflict {
            resource_type: "flight".into(),
            identifier: number.to_string(),
        },
        CoreError::DuplicateHotel { id } => CliError::Conflict {
            resource_type: "hotel".into(),
            identifier: id.to_string(),
        },
        CoreError::DuplicateUser { username } => CliError::Conflict {
            resource_type: "user".into(),
            identifier: username,
        },

        CoreError::FlightFull { number } => CliError::FullyBooked {
            what: format!("Flight {number}"),
        },
        CoreError::HotelFull { id } => CliError::FullyBooked {
            what: format!("Hotel {id}"),
        },

        err @ (CoreError::InvalidTransition { .. } | CoreError::NotReservationOwner { .. }) => {
            CliError::InvalidTransition {
                message: err.to_string(),
            }
        }

        CoreError::InvalidCredentials => CliError::AuthFailed,
        CoreError::WrongRole => CliError::WrongRole,

        err @ (CoreError::MalformedRecord { .. }
        | CoreError::ReadFailed { .. }
        | CoreError::WriteFailed { .. }
        | CoreError::DecodeFailed { .. }) => CliError::DataFile {
            message: err.to_string(),
            dir,
        },
    }
}
