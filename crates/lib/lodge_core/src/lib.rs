//! # lodge_core
//!
//! Core domain logic for Lodge: admin credentials, session tokens and the
//! availability mirror fed by the booking platform.

pub mod auth;
pub mod availability;
pub mod migrate;
pub mod models;
pub mod store;
pub mod uuid;
