//! Smooth scrolling to page regions.

use crate::state::sections::SectionId;

/// Smoothly scroll the region for `id` into view, aligned to its top.
///
/// Does not touch `SectionState`; the active section only changes when the
/// resulting scroll produces an intersection event.
pub fn scroll_to_section(id: SectionId) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id.as_str()))
        else {
            log::warn!("scroll target `{id}` is not rendered");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
