//! Upstream classifier adapter.
//!
//! DESIGN
//! ======
//! Classification, evidence retrieval and source scoring happen in an
//! external service. This module only forwards requests to it over HTTP and
//! reports whether it is up yet. Handlers depend on the `Classify` trait.

pub mod http;
pub mod types;

pub use http::HttpClassifier;
pub use types::{Classification, ClassifierError, Classify};
