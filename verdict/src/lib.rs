//! Shared check contract and result presentation for the news checker.
//!
//! This crate owns the `/api/check` wire representation used by `server`,
//! `client`, and `cli`, the rules for interpreting a raw HTTP reply, and the
//! pure mapping from a classification result onto display text. It has no
//! browser or network dependencies so every consumer renders identically.

pub mod outcome;
pub mod present;
pub mod wire;

pub use outcome::{CheckOutcome, GENERIC_ERROR_MESSAGE, NOT_READY_STATUS, ResponseError, interpret_response};
pub use present::{EvidenceEntry, ResultView, TermEntry, Verdict, escape_html, render_result};
pub use wire::{CheckRequest, CheckResponse, ErrorBody, EvidenceItem, LangHint, TermWeight, Weight};

/// Fixed endpoint path for check submissions.
pub const CHECK_ENDPOINT: &str = "/api/check";
