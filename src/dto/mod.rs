pub mod properties;
pub mod reservations;
pub mod users;
