//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the check form, the result region, and the theme
//! switch while reading/writing shared state from Leptos context providers.

pub mod check_form;
pub mod result_panel;
pub mod theme_toggle;
