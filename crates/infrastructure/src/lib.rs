//! Warden DNS Infrastructure Layer
//!
//! SQLite implementations of the store ports, the upstream forwarder, and
//! the hickory-server listener glue.
pub mod database;
pub mod dns;
pub mod repositories;
