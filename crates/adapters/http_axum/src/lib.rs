//! # goty-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON voting API** (`/goty`, `/games`, plus the greeting and
//!   health probes)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//! - Apply the wide-open CORS policy: every origin is accepted on purpose —
//!   the API is meant to be consumed directly from arbitrary front-ends
//!
//! ## Dependency rule
//! Depends on `goty-app` (for the port trait and services) and `goty-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
