//! Networking for the `/api/check` exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and maps raw replies onto check outcomes.
//! Wire types come from the shared `verdict` crate.

pub mod api;
