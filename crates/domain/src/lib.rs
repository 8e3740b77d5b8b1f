//! # goty-domain
//!
//! Pure domain model for the goty voting service.
//!
//! ## Responsibilities
//! - Foundational types: the opaque [`GameId`](id::GameId) identifier and
//!   error conventions
//! - Define **Game entries** (documents with a display title, a vote
//!   counter, and arbitrary pass-through fields)
//! - Define the **vote receipt** returned by a successful vote
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod game;
pub mod vote;
