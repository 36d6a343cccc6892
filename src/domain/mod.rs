//! Domain types, validation rules and the ports the application depends on.

pub mod ports;
pub mod transaction;
pub mod validation;
