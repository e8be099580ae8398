//! Interpretation of a raw `/api/check` reply.
//!
//! The caller supplies the HTTP status and body text; this module decides
//! which of the three user-visible outcomes applies. Transport failures never
//! reach here; they are reported by the caller's own error type.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use crate::wire::{CheckResponse, ErrorBody};

/// Status the backend uses while its model is still initializing.
pub const NOT_READY_STATUS: u16 = 202;

/// Message shown when an error reply carries no usable `message`.
pub const GENERIC_ERROR_MESSAGE: &str = "Server Error";

/// Error returned by [`interpret_response`].
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// A success reply whose body is not a valid check result.
    #[error("invalid check response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What the user should see for a completed request.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckOutcome {
    /// Backend model still loading; nothing to render.
    NotReady,
    /// Backend answered with an error status.
    Rejected { status: u16, message: String },
    /// Classification result ready for rendering.
    Verdict(CheckResponse),
}

/// Map a status and body onto a [`CheckOutcome`].
///
/// The not-ready status is checked before the success range because it is
/// itself a 2xx code. Error bodies that are not JSON, or lack a non-empty
/// `message`, fall back to [`GENERIC_ERROR_MESSAGE`].
///
/// # Errors
///
/// Returns [`ResponseError::Decode`] when a success body cannot be decoded.
pub fn interpret_response(status: u16, body: &str) -> Result<CheckOutcome, ResponseError> {
    if status == NOT_READY_STATUS {
        return Ok(CheckOutcome::NotReady);
    }
    if !(200..300).contains(&status) {
        return Ok(CheckOutcome::Rejected { status, message: error_message(body) });
    }
    let response: CheckResponse = serde_json::from_str(body)?;
    Ok(CheckOutcome::Verdict(response))
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned())
}
