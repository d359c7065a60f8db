//! Admin menus: catalog management, approvals, cancellations, reports.

use std::path::Path;

use owo_colors::OwoColorize;

use tripdesk_core::{DataStore, Flight, Hotel, ReservationStatus, report};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::{CliError, from_core};
use crate::output::{self, FlightRow, HotelRow, ReservationRow, UserRow};

use super::{notify_err, prompt};

pub fn menu(store: &mut DataStore, data_dir: &Path, global: &GlobalOpts) -> Result<(), CliError> {
    loop {
        notifications(store);

        let choice = prompt::select(
            "Administrator menu",
            &[
                "Manage flights",
                "Manage hotels",
                "View all reservations",
                "Manage users",
                "Handle reservation approvals",
                "Handle cancellation requests",
                "Write reservation report",
                "Log out",
            ],
        )?;
        match choice {
            0 => manage_flights(store, data_dir)?,
            1 => manage_hotels(store, data_dir)?,
            2 => list_reservations(store, None),
            3 => manage_users(store, data_dir, global)?,
            4 => handle_approvals(store, data_dir)?,
            5 => handle_cancellations(store, data_dir)?,
            6 => match report::write_report(store, data_dir) {
                Ok(path) => println!("Report written to {}", path.display()),
                Err(err) => notify_err(&from_core(err, data_dir)),
            },
            _ => {
                persist(store, data_dir)?;
                println!("Logged out.");
                return Ok(());
            }
        }
    }
}

/// What still needs the admin's attention, shown on every pass through
/// the menu.
fn notifications(store: &DataStore) {
    let pending = store
        .reservations_with_status(ReservationStatus::Pending)
        .count();
    let cancel_requests = store
        .reservations_with_status(ReservationStatus::CancelRequested)
        .count();
    if pending == 0 && cancel_requests == 0 {
        return;
    }
    println!(
        "\n{} {} pending approval, {} cancellation request(s)",
        "Attention:".yellow().bold(),
        pending,
        cancel_requests
    );
}

fn persist(store: &DataStore, data_dir: &Path) -> Result<(), CliError> {
    store.save(data_dir).map_err(|e| from_core(e, data_dir))
}

// ── Flights ──────────────────────────────────────────────────────────

fn manage_flights(store: &mut DataStore, data_dir: &Path) -> Result<(), CliError> {
    loop {
        let choice = prompt::select(
            "Flight management",
            &["Add flight", "Edit flight", "Delete flight", "List flights", "Back"],
        )?;
        let result = match choice {
            0 => prompt_flight(None)?.map_or(Ok(()), |f| store.add_flight(f)),
            1 => {
                let number = prompt::input_u32("Flight number to edit (0 to go back)")?;
                if number == 0 {
                    continue;
                }
                match prompt_flight(Some(number))? {
                    Some(flight) => store.update_flight(flight),
                    None => continue,
                }
            }
            2 => {
                let number = prompt::input_u32("Flight number to delete (0 to go back)")?;
                if number == 0 {
                    continue;
                }
                store.remove_flight(number)
            }
            3 => {
                list_flights(store);
                continue;
            }
            _ => return persist(store, data_dir),
        };
        match result {
            Ok(()) => persist(store, data_dir)?,
            Err(err) => notify_err(&from_core(err, data_dir)),
        }
    }
}

/// Prompt all flight fields. With `number` set, this is an edit and the
/// key is fixed; otherwise the key is asked first.
fn prompt_flight(number: Option<u32>) -> Result<Option<Flight>, CliError> {
    let number = match number {
        Some(n) => n,
        None => {
            let n = prompt::input_u32("Flight number (0 to go back)")?;
            if n == 0 {
                return Ok(None);
            }
            n
        }
    };
    Ok(Some(Flight {
        number,
        origin: prompt::input_text("Origin")?,
        destination: prompt::input_text("Destination")?,
        departure: prompt::input_text("Departure time")?,
        arrival: prompt::input_text("Arrival time")?,
        seats: prompt::input_u32("Seat capacity")?,
    }))
}

fn list_flights(store: &DataStore) {
    let rows: Vec<FlightRow> = store
        .flights()
        .iter()
        .map(|f| FlightRow::new(store, f))
        .collect();
    if rows.is_empty() {
        println!("No flights on file.");
        return;
    }
    println!(
        "{}",
        output::render_list(&OutputFormat::Table, &rows, |r| r.number.to_string())
    );
}

// ── Hotels ───────────────────────────────────────────────────────────

fn manage_hotels(store: &mut DataStore, data_dir: &Path) -> Result<(), CliError> {
    loop {
        let choice = prompt::select(
            "Hotel management",
            &["Add hotel", "Edit hotel", "Delete hotel", "List hotels", "Back"],
        )?;
        let result = match choice {
            0 => prompt_hotel(None)?.map_or(Ok(()), |h| store.add_hotel(h)),
            1 => {
                let id = prompt::input_u32("Hotel id to edit (0 to go back)")?;
                if id == 0 {
                    continue;
                }
                match prompt_hotel(Some(id))? {
                    Some(hotel) => store.update_hotel(hotel),
                    None => continue,
                }
            }
            2 => {
                let id = prompt::input_u32("Hotel id to delete (0 to go back)")?;
                if id == 0 {
                    continue;
                }
                store.remove_hotel(id)
            }
            3 => {
                list_hotels(store);
                continue;
            }
            _ => return persist(store, data_dir),
        };
        match result {
            Ok(()) => persist(store, data_dir)?,
            Err(err) => notify_err(&from_core(err, data_dir)),
        }
    }
}

fn prompt_hotel(id: Option<u32>) -> Result<Option<Hotel>, CliError> {
    let id = match id {
        Some(id) => id,
        None => {
            let id = prompt::input_u32("Hotel id (0 to go back)")?;
            if id == 0 {
                return Ok(None);
            }
            id
        }
    };
    Ok(Some(Hotel {
        id,
        name: prompt::input_text("Hotel name")?,
        location: prompt::input_text("Location")?,
        rooms: prompt::input_u32("Room capacity")?,
    }))
}

fn list_hotels(store: &DataStore) {
    let rows: Vec<HotelRow> = store
        .hotels()
        .iter()
        .map(|h| HotelRow::new(store, h))
        .collect();
    if rows.is_empty() {
        println!("No hotels on file.");
        return;
    }
    println!(
        "{}",
        output::render_list(&OutputFormat::Table, &rows, |r| r.id.to_string())
    );
}

// ── Reservations ─────────────────────────────────────────────────────

fn list_reservations(store: &DataStore, status: Option<ReservationStatus>) {
    let rows: Vec<ReservationRow> = store
        .reservations()
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .map(ReservationRow::new)
        .collect();
    if rows.is_empty() {
        match status {
            Some(s) => println!("No reservations with status '{s}'."),
            None => println!("No reservations on file."),
        }
        return;
    }
    println!(
        "{}",
        output::render_list(&OutputFormat::Table, &rows, |r| r.id.to_string())
    );
}

/// Approve or reject Pending reservations one at a time.
fn handle_approvals(store: &mut DataStore, data_dir: &Path) -> Result<(), CliError> {
    loop {
        list_reservations(store, Some(ReservationStatus::Pending));
        if store
            .reservations_with_status(ReservationStatus::Pending)
            .next()
            .is_none()
        {
            return Ok(());
        }

        let id = prompt::input_u32("Reservation id to decide (0 to go back)")?;
        if id == 0 {
            return Ok(());
        }
        let decision = prompt::select("Decision", &["Approve", "Reject", "Back"])?;
        let result = match decision {
            0 => store.approve(id),
            1 => store.reject(id),
            _ => continue,
        };
        match result {
            Ok(()) => persist(store, data_dir)?,
            Err(err) => notify_err(&from_core(err, data_dir)),
        }
    }
}

/// Grant or deny cancellation requests. Denying restores Approved.
fn handle_cancellations(store: &mut DataStore, data_dir: &Path) -> Result<(), CliError> {
    loop {
        list_reservations(store, Some(ReservationStatus::CancelRequested));
        if store
            .reservations_with_status(ReservationStatus::CancelRequested)
            .next()
            .is_none()
        {
            return Ok(());
        }

        let id = prompt::input_u32("Reservation id to settle (0 to go back)")?;
        if id == 0 {
            return Ok(());
        }
        let decision = prompt::select(
            "Decision",
            &["Grant cancellation", "Deny (keep Approved)", "Back"],
        )?;
        let granted = match decision {
            0 => true,
            1 => false,
            _ => continue,
        };
        match store.resolve_cancellation(id, granted) {
            Ok(()) => persist(store, data_dir)?,
            Err(err) => notify_err(&from_core(err, data_dir)),
        }
    }
}

// ── Users ────────────────────────────────────────────────────────────

fn manage_users(
    store: &mut DataStore,
    data_dir: &Path,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    loop {
        let rows: Vec<UserRow> = store.users().iter().map(UserRow::new).collect();
        if rows.is_empty() {
            println!("No accounts registered.");
            return Ok(());
        }
        println!(
            "{}",
            output::render_list(&OutputFormat::Table, &rows, |r| r.username.clone())
        );

        let choice = prompt::select("User management", &["Delete a user", "Back"])?;
        if choice != 0 {
            return Ok(());
        }
        let username = prompt::input_text("Username to delete")?;
        if !prompt::confirm(
            &format!("Delete account '{username}'? Their reservations are kept."),
            global.yes,
        )? {
            continue;
        }
        match store.remove_user(&username) {
            Ok(()) => persist(store, data_dir)?,
            Err(err) => notify_err(&from_core(err, data_dir)),
        }
    }
}
