//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page regions and chrome, reading section, theme, and
//! viewport state from Leptos context providers.

pub mod connect;
pub mod footer;
pub mod icon;
pub mod intro;
pub mod projects;
pub mod region;
pub mod side_nav;
pub mod theme_toggle;
pub mod work;
