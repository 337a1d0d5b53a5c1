//! Business services called by handlers.

pub mod auth;
