//! Quartz DNS Infrastructure Layer
//!
//! Adapters behind the application ports: the SQLite record store, the
//! in-process record cache with its invalidation bus, and the DNS front end.

pub mod cache;
pub mod database;
pub mod dns;
pub mod repositories;
