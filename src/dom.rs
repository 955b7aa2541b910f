use log::{error, warn};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::state::Section;

/// Smooth-scrolls to the section anchor. Returns false when the anchor is not in the document.
pub fn scroll_to_section(section: Section) -> bool {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            warn!("No element with id '{}' to scroll to", section.id());
            false
        }
    }
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn reload_page() {
    if let Some(window) = window() {
        if let Err(e) = window.location().reload() {
            error!("Page reload failed: {:?}", e);
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn scrolls_to_existing_anchor_only() {
        let document = window().and_then(|w| w.document()).expect("document");
        let body = document.body().expect("body");

        for section in Section::ALL {
            assert!(!scroll_to_section(section), "{} found before it exists", section.id());

            let anchor = document.create_element("section").expect("section");
            anchor.set_id(section.id());
            body.append_child(&anchor).expect("append");

            assert!(scroll_to_section(section), "{} not scrolled to", section.id());
            anchor.remove();
        }
    }

    #[wasm_bindgen_test]
    fn scroll_offset_is_finite() {
        assert!(scroll_offset().is_finite());
    }
}
