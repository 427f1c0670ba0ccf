use leptos::logging::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Smooth-scrolls the page to the section whose id is `section_id`.
/// Only meaningful in the browser; call it from event handlers.
pub fn scroll_to_section(section_id: &str) {
    let Some(element) = leptos::document().get_element_by_id(section_id) else {
        warn!("[NAV] No section with id {}", section_id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
