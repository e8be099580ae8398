//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `check` is the submission/result state owned by the check page controller;
//! `ui` holds presentation-only settings. Both are provided as `RwSignal`
//! contexts from the root `App`.

pub mod check;
pub mod ui;
