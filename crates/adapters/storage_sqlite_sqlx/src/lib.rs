//! # goty-adapter-storage-sqlite-sqlx
//!
//! `SQLite` document-store adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`GameStore`](goty_app::ports::GameStore) port
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations)
//! - Map between domain types and database rows, keeping unknown document
//!   fields intact in a JSON column
//!
//! Game entries are provisioned from outside the HTTP surface; the adapter
//! exposes [`SqliteGameStore::insert`] as that channel (also used by tests).
//!
//! ## Dependency rule
//! Depends on `goty-app` (for the port trait) and `goty-domain` (for domain
//! types). The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod game_store;
pub mod pool;

pub use error::StorageError;
pub use game_store::SqliteGameStore;
pub use pool::{Config, Database};
