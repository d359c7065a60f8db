//! Traveler menus: browsing, booking, and cancellation requests.

use std::path::Path;

use owo_colors::OwoColorize;
use rand::seq::SliceRandom;

use tripdesk_core::{DataStore, ReservationStatus};

use crate::cli::OutputFormat;
use crate::error::{CliError, from_core};
use crate::output::{self, FlightRow, HotelRow, ReservationRow};

use super::{notify_err, prompt};

/// Promo phrases for the menu banner, one picked at random per visit.
const RECOMMENDATION_PHRASES: &[&str] = &[
    "Travelers love this one right now",
    "A top pick among our regulars",
    "Adventure awaits on this route",
];

pub fn menu(store: &mut DataStore, data_dir: &Path, username: &str) -> Result<(), CliError> {
    loop {
        recommend_flight(store);

        let choice = prompt::select(
            &format!("Traveler menu -- logged in as {username}"),
            &[
                "Search flights",
                "Search hotels",
                "Reserve a flight",
                "Reserve a hotel",
                "My reservations",
                "Request a cancellation",
                "Log out",
            ],
        )?;
        match choice {
            0 => list_flights(store),
            1 => list_hotels(store),
            2 => reserve_flight(store, data_dir, username)?,
            3 => reserve_hotel(store, data_dir, username)?,
            4 => list_my_reservations(store, username),
            5 => request_cancellation(store, data_dir, username)?,
            _ => {
                store.save(data_dir).map_err(|e| from_core(e, data_dir))?;
                println!("Logged out.");
                return Ok(());
            }
        }
    }
}

/// Nudge the traveler toward a random flight, like a departures-board ad.
fn recommend_flight(store: &DataStore) {
    let mut rng = rand::thread_rng();
    let Some(flight) = store.flights().choose(&mut rng) else {
        return;
    };
    let Some(phrase) = RECOMMENDATION_PHRASES.choose(&mut rng) else {
        return;
    };
    println!(
        "\n{} Flight {} ({}) -- {}",
        "Tip:".cyan().bold(),
        flight.number,
        flight.route(),
        phrase
    );
}

fn list_flights(store: &DataStore) {
    let rows: Vec<FlightRow> = store
        .flights()
        .iter()
        .map(|f| FlightRow::new(store, f))
        .collect();
    if rows.is_empty() {
        println!("No flights available.");
        return;
    }
    println!(
        "{}",
        output::render_list(&OutputFormat::Table, &rows, |r| r.number.to_string())
    );
}

fn list_hotels(store: &DataStore) {
    let rows: Vec<HotelRow> = store
        .hotels()
        .iter()
        .map(|h| HotelRow::new(store, h))
        .collect();
    if rows.is_empty() {
        println!("No hotels available.");
        return;
    }
    println!(
        "{}",
        output::render_list(&OutputFormat::Table, &rows, |r| r.id.to_string())
    );
}

fn reserve_flight(store: &mut DataStore, data_dir: &Path, username: &str) -> Result<(), CliError> {
    list_flights(store);
    let number = prompt::input_u32("Flight number to reserve (0 to go back)")?;
    if number == 0 {
        return Ok(());
    }
    match store.reserve_flight(username, number) {
        Ok(reservation) => {
            store.save(data_dir).map_err(|e| from_core(e, data_dir))?;
            println!(
                "Reservation {} placed for {} -- awaiting admin approval.",
                reservation.id, reservation.target
            );
        }
        Err(err) => notify_err(&from_core(err, data_dir)),
    }
    Ok(())
}

fn reserve_hotel(store: &mut DataStore, data_dir: &Path, username: &str) -> Result<(), CliError> {
    list_hotels(store);
    let id = prompt::input_u32("Hotel id to reserve (0 to go back)")?;
    if id == 0 {
        return Ok(());
    }
    match store.reserve_hotel(username, id) {
        Ok(reservation) => {
            store.save(data_dir).map_err(|e| from_core(e, data_dir))?;
            println!(
                "Reservation {} placed for {} -- awaiting admin approval.",
                reservation.id, reservation.target
            );
        }
        Err(err) => notify_err(&from_core(err, data_dir)),
    }
    Ok(())
}

fn list_my_reservations(store: &DataStore, username: &str) {
    let rows: Vec<ReservationRow> = store
        .reservations_for_user(username)
        .map(ReservationRow::new)
        .collect();
    if rows.is_empty() {
        println!("You have no reservations.");
        return;
    }
    println!(
        "{}",
        output::render_list(&OutputFormat::Table, &rows, |r| r.id.to_string())
    );
}

/// Only Approved reservations can be asked to cancel; the admin settles
/// the request later.
fn request_cancellation(
    store: &mut DataStore,
    data_dir: &Path,
    username: &str,
) -> Result<(), CliError> {
    list_my_reservations(store, username);
    if store
        .reservations_for_user(username)
        .all(|r| r.status != ReservationStatus::Approved)
    {
        println!("Nothing to cancel: only Approved reservations can be cancelled.");
        return Ok(());
    }

    let id = prompt::input_u32("Reservation id to cancel (0 to go back)")?;
    if id == 0 {
        return Ok(());
    }
    match store.request_cancellation(username, id) {
        Ok(()) => {
            store.save(data_dir).map_err(|e| from_core(e, data_dir))?;
            println!("Cancellation request submitted for reservation {id}.");
        }
        Err(err) => notify_err(&from_core(err, data_dir)),
    }
    Ok(())
}
