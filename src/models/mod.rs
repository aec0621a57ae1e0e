//! Database and configuration models.

pub mod account;
#[cfg(feature = "server")]
pub mod auth;
pub mod config;
pub mod repo;
