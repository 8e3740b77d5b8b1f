//! # goty-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the storage adapter must implement
//!   (driven/outbound port):
//!   - `GameStore` — snapshot reads and partial vote updates
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CatalogService` — list all game entries
//!   - `VoteService` — record one vote on one entry
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `goty-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
