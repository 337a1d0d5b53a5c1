//! Domain models shared by the stores and the HTTP layer.

pub mod auth;
pub mod availability;
