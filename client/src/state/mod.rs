//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each concern gets a small plain struct with its own mutation methods. The
//! app wraps them in `RwSignal`s and provides them through Leptos context, so
//! none of them is global and each can be tested without a browser.

pub mod sections;
pub mod theme;
pub mod viewport;
