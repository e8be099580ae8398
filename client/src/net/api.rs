//! Check submission over HTTP.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport errors out since checks are only
//! submitted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and undecodable success bodies both surface as
//! [`CheckError`]; the caller logs them and shows a connection notice. Status
//! based outcomes (not ready, rejected) are not errors here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use verdict::{CheckOutcome, CheckRequest, ResponseError, interpret_response};

/// Failure to obtain a usable reply.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The request never completed (network failure, unreadable body).
    #[error("{0}")]
    Transport(String),
    /// A success reply that did not decode as a check result.
    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one check request and returns the raw reply.
#[allow(async_fn_in_trait)]
pub trait CheckTransport {
    /// # Errors
    ///
    /// Returns an error string if the request cannot be sent or its body read.
    async fn post_check(&self, request: &CheckRequest) -> Result<RawResponse, String>;
}

/// Browser `fetch` transport posting JSON to [`verdict::CHECK_ENDPOINT`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl CheckTransport for BrowserTransport {
    async fn post_check(&self, request: &CheckRequest) -> Result<RawResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(verdict::CHECK_ENDPOINT)
                .json(request)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| e.to_string())?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }
}

/// Issue exactly one request and interpret the reply.
///
/// # Errors
///
/// Returns [`CheckError::Transport`] when the transport fails and
/// [`CheckError::Response`] when a success body cannot be decoded.
pub async fn submit_check<T: CheckTransport>(transport: &T, request: &CheckRequest) -> Result<CheckOutcome, CheckError> {
    let raw = transport.post_check(request).await.map_err(CheckError::Transport)?;
    Ok(interpret_response(raw.status, &raw.body)?)
}
