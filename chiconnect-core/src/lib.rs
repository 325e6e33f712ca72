//! Core types and local storage for ChiConnect.
//!
//! This crate provides everything the front ends share:
//! - `Event`, `Connection` and `UserProfile` records
//! - `kv` module with the key-value storage port and its backends
//! - `Store`, the accessor that reads, updates and seeds the collections

pub mod config;
pub mod connection;
pub mod constants;
pub mod error;
pub mod event;
pub mod export;
pub mod kv;
pub mod profile;
pub mod seed;
pub mod stats;
pub mod store;
pub mod timeline;

pub use connection::{Connection, NewConnection};
pub use error::{StoreError, StoreResult};
pub use event::{Event, RsvpStatus};
pub use profile::UserProfile;
pub use store::Store;
