// ── Reservation lifecycle ──
//
// Placement is the only point where availability is enforced; every later
// step is a pure status transition guarded by the current status.
//
//   Pending ──approve──▶ Approved ──request_cancellation──▶ CancelRequested
//      │                                                         │
//      └──reject──▶ Rejected              granted ◀──resolve──▶ denied
//                                            │                    │
//                                        Cancelled            Approved

use crate::error::CoreError;
use crate::model::{Reservation, ReservationStatus, ReservationTarget};
use crate::store::DataStore;

impl DataStore {
    /// Place a Pending flight reservation. Gated on `seats_remaining`:
    /// the flight must exist and have capacity left after Approved
    /// bookings are counted.
    pub fn reserve_flight(&mut self, username: &str, number: u32) -> Result<Reservation, CoreError> {
        if self.seats_remaining(number)? == 0 {
            return Err(CoreError::FlightFull { number });
        }
        Ok(self.place(username, ReservationTarget::Flight(number)))
    }

    /// Place a Pending hotel reservation, gated on `rooms_remaining`.
    pub fn reserve_hotel(&mut self, username: &str, id: u32) -> Result<Reservation, CoreError> {
        if self.rooms_remaining(id)? == 0 {
            return Err(CoreError::HotelFull { id });
        }
        Ok(self.place(username, ReservationTarget::Hotel(id)))
    }

    fn place(&mut self, username: &str, target: ReservationTarget) -> Reservation {
        let reservation = Reservation {
            id: self.next_reservation_id(),
            username: username.to_string(),
            target,
            status: ReservationStatus::Pending,
        };
        tracing::info!(id = reservation.id, username, %target, "reservation placed");
        self.reservations.push(reservation.clone());
        reservation
    }

    /// Admin: approve a Pending reservation.
    pub fn approve(&mut self, id: u32) -> Result<(), CoreError> {
        self.transition(id, "approve", ReservationStatus::Pending, ReservationStatus::Approved)
    }

    /// Admin: reject a Pending reservation.
    pub fn reject(&mut self, id: u32) -> Result<(), CoreError> {
        self.transition(id, "reject", ReservationStatus::Pending, ReservationStatus::Rejected)
    }

    /// Traveler: ask for an Approved reservation of theirs to be
    /// cancelled. Any other status rejects the request.
    pub fn request_cancellation(&mut self, username: &str, id: u32) -> Result<(), CoreError> {
        let reservation = self
            .find_reservation(id)
            .ok_or(CoreError::ReservationNotFound { id })?;
        if reservation.username != username {
            return Err(CoreError::NotReservationOwner {
                id,
                username: username.into(),
            });
        }
        self.transition(
            id,
            "request cancellation of",
            ReservationStatus::Approved,
            ReservationStatus::CancelRequested,
        )
    }

    /// Admin: settle a CancelRequested reservation -- granted moves it to
    /// Cancelled (freeing the seat/room), denied restores Approved.
    pub fn resolve_cancellation(&mut self, id: u32, granted: bool) -> Result<(), CoreError> {
        let to = if granted {
            ReservationStatus::Cancelled
        } else {
            ReservationStatus::Approved
        };
        self.transition(id, "resolve cancellation of", ReservationStatus::CancelRequested, to)
    }

    fn transition(
        &mut self,
        id: u32,
        action: &'static str,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> Result<(), CoreError> {
        let reservation = self
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::ReservationNotFound { id })?;
        if reservation.status != from {
            return Err(CoreError::InvalidTransition {
                action,
                status: reservation.status,
            });
        }
        reservation.status = to;
        tracing::info!(id, %from, %to, "reservation transition");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Flight;
    use pretty_assertions::assert_eq;

    fn store_with_flight(seats: u32) -> DataStore {
        let mut store = DataStore::new();
        store
            .add_flight(Flight {
                number: 100,
                origin: "LIS".into(),
                destination: "OPO".into(),
                departure: "08:00".into(),
                arrival: "09:00".into(),
                seats,
            })
            .unwrap();
        store
    }

    #[test]
    fn reserving_creates_a_pending_reservation() {
        let mut store = store_with_flight(2);
        let res = store.reserve_flight("ana", 100).unwrap();
        assert_eq!(res.status, ReservationStatus::Pending);
        assert_eq!(res.target, ReservationTarget::Flight(100));
        assert_eq!(store.reservations().len(), 1);
    }

    #[test]
    fn booking_is_gated_on_approved_count_only() {
        let mut store = store_with_flight(1);
        // A pending request does not consume the seat yet.
        store.reserve_flight("ana", 100).unwrap();
        let second = store.reserve_flight("bea", 100).unwrap();

        // Once one is approved the flight is full.
        store.approve(second.id).unwrap();
        assert!(matches!(
            store.reserve_flight("carla", 100),
            Err(CoreError::FlightFull { number: 100 })
        ));
    }

    #[test]
    fn reserving_unknown_flight_errors() {
        let mut store = store_with_flight(1);
        assert!(matches!(
            store.reserve_flight("ana", 999),
            Err(CoreError::FlightNotFound { number: 999 })
        ));
    }

    #[test]
    fn approve_requires_pending() {
        let mut store = store_with_flight(2);
        let id = store.reserve_flight("ana", 100).unwrap().id;
        store.approve(id).unwrap();
        assert!(matches!(
            store.approve(id),
            Err(CoreError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn cancellation_only_from_approved() {
        let mut store = store_with_flight(2);
        let id = store.reserve_flight("ana", 100).unwrap().id;

        // Pending: not cancellable.
        assert!(matches!(
            store.request_cancellation("ana", id),
            Err(CoreError::InvalidTransition { .. })
        ));

        store.approve(id).unwrap();
        store.request_cancellation("ana", id).unwrap();
        assert_eq!(
            store.find_reservation(id).unwrap().status,
            ReservationStatus::CancelRequested
        );

        // Rejected: not cancellable either.
        let other = store.reserve_flight("ana", 100).unwrap().id;
        store.reject(other).unwrap();
        assert!(matches!(
            store.request_cancellation("ana", other),
            Err(CoreError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn only_the_owner_may_request_cancellation() {
        let mut store = store_with_flight(2);
        let id = store.reserve_flight("ana", 100).unwrap().id;
        store.approve(id).unwrap();
        assert!(matches!(
            store.request_cancellation("bea", id),
            Err(CoreError::NotReservationOwner { .. })
        ));
    }

    #[test]
    fn granted_cancellation_frees_the_seat() {
        let mut store = store_with_flight(1);
        let id = store.reserve_flight("ana", 100).unwrap().id;
        store.approve(id).unwrap();
        assert_eq!(store.seats_remaining(100).unwrap(), 0);

        store.request_cancellation("ana", id).unwrap();
        store.resolve_cancellation(id, true).unwrap();
        assert_eq!(
            store.find_reservation(id).unwrap().status,
            ReservationStatus::Cancelled
        );
        assert_eq!(store.seats_remaining(100).unwrap(), 1);
    }

    #[test]
    fn denied_cancellation_restores_approved() {
        let mut store = store_with_flight(1);
        let id = store.reserve_flight("ana", 100).unwrap().id;
        store.approve(id).unwrap();
        store.request_cancellation("ana", id).unwrap();

        store.resolve_cancellation(id, false).unwrap();
        assert_eq!(
            store.find_reservation(id).unwrap().status,
            ReservationStatus::Approved
        );
    }

    #[test]
    fn resolve_requires_cancel_requested() {
        let mut store = store_with_flight(1);
        let id = store.reserve_flight("ana", 100).unwrap().id;
        assert!(matches!(
            store.resolve_cancellation(id, true),
            Err(CoreError::InvalidTransition { .. })
        ));
    }
}
