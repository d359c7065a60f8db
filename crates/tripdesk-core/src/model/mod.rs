// ── Domain model ──
//
// Plain record types. Collections and derived accounting live in `store`
// and `availability`; these types carry no behavior beyond small helpers.

mod flight;
mod hotel;
mod reservation;
mod user;

pub use flight::Flight;
pub use hotel::Hotel;
pub use reservation::{Reservation, ReservationStatus, ReservationTarget};
pub use user::{Role, User};
