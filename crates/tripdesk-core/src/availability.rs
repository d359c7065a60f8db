// ── Availability accounting ──
//
// Capacity is never decremented in place. Every availability figure is
// derived on demand by scanning the reservation list, so the records on
// disk stay a plain log of what was booked.
//
// Two figures exist on purpose:
//   * `seats_remaining` / `rooms_remaining` -- capacity minus Approved
//     bookings. This is the booking gate: the sum of Approved reservations
//     can never exceed capacity because placement checks it.
//   * `advertised_seats` / `advertised_rooms` -- capacity minus Pending
//     and Approved, clamped at zero. This is what a traveler browsing the
//     catalog sees, so a flight with ten pending requests does not look
//     wide open.

use crate::error::CoreError;
use crate::model::ReservationStatus;
use crate::store::DataStore;

impl DataStore {
    /// Count reservations against a flight in the given status.
    pub fn count_for_flight(&self, number: u32, status: ReservationStatus) -> u32 {
        self.reservations()
            .iter()
            .filter(|r| r.status == status && r.target.flight_number() == Some(number))
            .count() as u32
    }

    /// Count reservations against a hotel in the given status.
    pub fn count_for_hotel(&self, id: u32, status: ReservationStatus) -> u32 {
        self.reservations()
            .iter()
            .filter(|r| r.status == status && r.target.hotel_id() == Some(id))
            .count() as u32
    }

    /// Seats not yet consumed by Approved bookings. The booking gate.
    pub fn seats_remaining(&self, number: u32) -> Result<u32, CoreError> {
        let flight = self
            .find_flight(number)
            .ok_or(CoreError::FlightNotFound { number })?;
        let approved = self.count_for_flight(number, ReservationStatus::Approved);
        Ok(flight.seats.saturating_sub(approved))
    }

    /// Rooms not yet consumed by Approved bookings.
    pub fn rooms_remaining(&self, id: u32) -> Result<u32, CoreError> {
        let hotel = self.find_hotel(id).ok_or(CoreError::HotelNotFound { id })?;
        let approved = self.count_for_hotel(id, ReservationStatus::Approved);
        Ok(hotel.rooms.saturating_sub(approved))
    }

    /// Seats shown to a browsing traveler: Pending requests also count
    /// against capacity, clamped at zero.
    pub fn advertised_seats(&self, number: u32) -> Result<u32, CoreError> {
        let flight = self
            .find_flight(number)
            .ok_or(CoreError::FlightNotFound { number })?;
        let taken = self.count_for_flight(number, ReservationStatus::Pending)
            + self.count_for_flight(number, ReservationStatus::Approved);
        Ok(flight.seats.saturating_sub(taken))
    }

    /// Rooms shown to a browsing traveler.
    pub fn advertised_rooms(&self, id: u32) -> Result<u32, CoreError> {
        let hotel = self.find_hotel(id).ok_or(CoreError::HotelNotFound { id })?;
        let taken = self.count_for_hotel(id, ReservationStatus::Pending)
            + self.count_for_hotel(id, ReservationStatus::Approved);
        Ok(hotel.rooms.saturating_sub(taken))
    }
}
