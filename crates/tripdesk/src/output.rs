//! Output formatting: table, JSON, plain.
//!
//! Row types are the presentation view of the core records -- they carry
//! the derived availability figures next to the raw capacity, and they
//! serialize as-is for the JSON formats.

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use tripdesk_core::{DataStore, Flight, Hotel, Reservation, User};

use crate::cli::OutputFormat;

// ── Row types ────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Tabled)]
pub struct FlightRow {
    pub number: u32,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub seats: u32,
    /// Seats minus pending and approved bookings, clamped at zero.
    pub available: u32,
}

impl FlightRow {
    /// Build a row; `available` is the advertised figure so browsing
    /// travelers don't race ten pending requests for one seat.
    pub fn new(store: &DataStore, flight: &Flight) -> Self {
        Self {
            number: flight.number,
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            departure: flight.departure.clone(),
            arrival: flight.arrival.clone(),
            seats: flight.seats,
            available: store.advertised_seats(flight.number).unwrap_or(0),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
pub struct HotelRow {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub rooms: u32,
    pub available: u32,
}

impl HotelRow {
    pub fn new(store: &DataStore, hotel: &Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name.clone(),
            location: hotel.location.clone(),
            rooms: hotel.rooms,
            available: store.advertised_rooms(hotel.id).unwrap_or(0),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
pub struct ReservationRow {
    pub id: u32,
    pub user: String,
    pub target: String,
    pub status: String,
}

impl ReservationRow {
    pub fn new(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            user: reservation.username.clone(),
            target: reservation.target.to_string(),
            status: reservation.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
pub struct UserRow {
    pub username: String,
    pub role: String,
}

impl UserRow {
    pub fn new(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            role: user.role.to_string(),
        }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render rows in the chosen format. `id_fn` supplies the one-per-line
/// key for `plain` output.
pub fn render_list<R>(format: &OutputFormat, rows: &[R], id_fn: impl Fn(&R) -> String) -> String
where
    R: Tabled + Serialize,
{
    match format {
        OutputFormat::Table => Table::new(rows).with(Style::rounded()).to_string(),
        OutputFormat::Json => render_json_pretty(rows),
        OutputFormat::JsonCompact => render_json_compact(rows),
        OutputFormat::Plain => rows.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Print rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    println!("{output}");
}

fn render_json_pretty<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("<serialization error: {e}>"))
}

fn render_json_compact<T: Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string(data).unwrap_or_else(|e| format!("<serialization error: {e}>"))
}
