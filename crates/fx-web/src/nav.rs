use crate::dom;
use fx_core::nav::{href_is_current, page_from_path};
use web_sys as web;

const NAV_LINK_SELECTOR: &str = ".nav-link";

/// Mark the nav link whose href equals the current page name and clear any
/// stale marker on the rest. Runs once at startup; there is nothing to keep
/// alive afterwards.
pub fn mark_active_link(window: &web::Window, document: &web::Document) {
    let path = window.location().pathname().unwrap_or_default();
    let page = page_from_path(&path);
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let href = link.get_attribute("href").unwrap_or_default();
        if href_is_current(&href, page) {
            let _ = link.class_list().add_1("active");
            let _ = link.set_attribute("aria-current", "page");
        } else {
            let _ = link.class_list().remove_1("active");
            let _ = link.remove_attribute("aria-current");
        }
    }
}
