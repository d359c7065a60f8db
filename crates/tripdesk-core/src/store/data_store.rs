// ── Central data store ──
//
// Owns the four record collections and the reservation-id counter.
// Booking-specific mutation lives in `booking.rs`; derived availability
// in `availability.rs`. This file is plain CRUD.

use crate::error::CoreError;
use crate::model::{Flight, Hotel, Reservation, ReservationStatus, User};

/// Reservation ids start above this so they are visually distinct from
/// flight numbers and hotel ids in mixed listings.
pub(crate) const RESERVATION_ID_SEED: u32 = 1000;

/// Central store for all tripdesk records.
#[derive(Debug, Default)]
pub struct DataStore {
    pub(crate) users: Vec<User>,
    pub(crate) flights: Vec<Flight>,
    pub(crate) hotels: Vec<Hotel>,
    pub(crate) reservations: Vec<Reservation>,
    /// Last issued reservation id; persisted so ids keep increasing
    /// across restarts.
    pub(crate) last_reservation_id: u32,
}

impl DataStore {
    pub fn new() -> Self {
        Self {
            last_reservation_id: RESERVATION_ID_SEED,
            ..Self::default()
        }
    }

    // ── Users ────────────────────────────────────────────────────────

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Insert a user, rejecting duplicate usernames.
    pub fn add_user(&mut self, user: User) -> Result<(), CoreError> {
        if self.find_user(&user.username).is_some() {
            return Err(CoreError::DuplicateUser {
                username: user.username,
            });
        }
        tracing::debug!(username = %user.username, role = %user.role, "user added");
        self.users.push(user);
        Ok(())
    }

    /// Remove a user by username. Reservations placed by the user are
    /// kept -- deletion does not cascade.
    pub fn remove_user(&mut self, username: &str) -> Result<(), CoreError> {
        let idx = self
            .users
            .iter()
            .position(|u| u.username == username)
            .ok_or_else(|| CoreError::UserNotFound {
                username: username.into(),
            })?;
        self.users.remove(idx);
        tracing::debug!(username, "user removed");
        Ok(())
    }

    // ── Flights ──────────────────────────────────────────────────────

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn find_flight(&self, number: u32) -> Option<&Flight> {
        self.flights.iter().find(|f| f.number == number)
    }

    pub fn add_flight(&mut self, flight: Flight) -> Result<(), CoreError> {
        if self.find_flight(flight.number).is_some() {
            return Err(CoreError::DuplicateFlight {
                number: flight.number,
            });
        }
        tracing::debug!(number = flight.number, route = %flight.route(), "flight added");
        self.flights.push(flight);
        Ok(())
    }

    /// Replace every non-key field of an existing flight. Availability is
    /// not re-validated against approved reservations here (booking-time
    /// enforcement only).
    pub fn update_flight(&mut self, flight: Flight) -> Result<(), CoreError> {
        let existing = self
            .flights
            .iter_mut()
            .find(|f| f.number == flight.number)
            .ok_or(CoreError::FlightNotFound {
                number: flight.number,
            })?;
        *existing = flight;
        Ok(())
    }

    /// Remove a flight. Reservations against it are kept (no cascade).
    pub fn remove_flight(&mut self, number: u32) -> Result<(), CoreError> {
        let idx = self
            .flights
            .iter()
            .position(|f| f.number == number)
            .ok_or(CoreError::FlightNotFound { number })?;
        self.flights.remove(idx);
        Ok(())
    }

    // ── Hotels ───────────────────────────────────────────────────────

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn find_hotel(&self, id: u32) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn add_hotel(&mut self, hotel: Hotel) -> Result<(), CoreError> {
        if self.find_hotel(hotel.id).is_some() {
            return Err(CoreError::DuplicateHotel { id: hotel.id });
        }
        tracing::debug!(id = hotel.id, name = %hotel.name, "hotel added");
        self.hotels.push(hotel);
        Ok(())
    }

    pub fn update_hotel(&mut self, hotel: Hotel) -> Result<(), CoreError> {
        let existing = self
            .hotels
            .iter_mut()
            .find(|h| h.id == hotel.id)
            .ok_or(CoreError::HotelNotFound { id: hotel.id })?;
        *existing = hotel;
        Ok(())
    }

    pub fn remove_hotel(&mut self, id: u32) -> Result<(), CoreError> {
        let idx = self
            .hotels
            .iter()
            .position(|h| h.id == id)
            .ok_or(CoreError::HotelNotFound { id })?;
        self.hotels.remove(idx);
        Ok(())
    }

    // ── Reservations ─────────────────────────────────────────────────

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn find_reservation(&self, id: u32) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn reservations_for_user<'a>(
        &'a self,
        username: &'a str,
    ) -> impl Iterator<Item = &'a Reservation> {
        self.reservations.iter().filter(move |r| r.username == username)
    }

    pub fn reservations_with_status(
        &self,
        status: ReservationStatus,
    ) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter().filter(move |r| r.status == status)
    }

    /// Issue the next reservation id. Strictly increasing; the counter is
    /// persisted alongside the records.
    pub fn next_reservation_id(&mut self) -> u32 {
        self.last_reservation_id += 1;
        self.last_reservation_id
    }

    pub fn last_reservation_id(&self) -> u32 {
        self.last_reservation_id
    }
}
