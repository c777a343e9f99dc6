//! # stayzup-storage
//!
//! SQLite persistence layer: one serialized write connection, a read pool,
//! `PRAGMA user_version` migrations, per-table queries, and the
//! [`ProgressionStore`](stayzup_core::traits::ProgressionStore) implementation.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use connection::DatabaseManager;
pub use store::SqliteStoreTx;
