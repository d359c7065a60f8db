// ── In-memory data store ──
//
// Vec-backed record collections with linear scans. The dataset is a
// handful of records owned by a single process; nothing here needs an
// index or a lock.

mod data_store;
mod persist;

pub use data_store::DataStore;
pub use persist::{
    FLIGHTS_FILE, HOTELS_FILE, LAST_ID_FILE, RESERVATIONS_FILE, USERS_FILE,
};
