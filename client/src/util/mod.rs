//! Browser glue shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` calls from page and component logic.
//! Every helper compiles to a no-op outside the `hydrate` feature so SSR and
//! native tests never touch a DOM.

pub mod dark_mode;
pub mod scroll;
pub mod section_observer;
pub mod viewport;
