//! Browser helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper isolates one browser API behind the `hydrate` feature so pages
//! and components stay testable natively; SSR paths no-op.

pub mod clipboard;
pub mod notice;
pub mod scroll;
pub mod theme;
