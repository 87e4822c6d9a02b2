// Host-side tests for active-link matching and the menu focus trap.

use fx_core::nav::{href_is_current, page_from_path, trap_wrap};

#[test]
fn trailing_segment_resolves_the_page() {
    assert_eq!(page_from_path("/about.html"), "about.html");
    assert_eq!(page_from_path("/foo/bar.html"), "bar.html");
    assert_eq!(page_from_path("about.html"), "about.html");
    // Site root and trailing slashes map to the index page
    assert_eq!(page_from_path("/"), "index.html");
    assert_eq!(page_from_path(""), "index.html");
    assert_eq!(page_from_path("/foo/"), "index.html");
}

#[test]
fn exactly_one_link_matches_the_about_page() {
    let links = ["index.html", "about.html", "contact.html"];
    let page = page_from_path("/about.html");
    let hits: Vec<&&str> = links.iter().filter(|h| href_is_current(h, page)).collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(*hits[0], "about.html");
}

#[test]
fn matching_is_exact_not_prefix() {
    assert!(href_is_current("about.html", "about.html"));
    assert!(!href_is_current("about", "about.html"));
    assert!(!href_is_current("/about.html", "about.html"));
    assert!(!href_is_current("about.html.bak", "about.html"));
}

#[test]
fn tab_wraps_last_to_first() {
    assert_eq!(trap_wrap(Some(3), 4, false), Some(0));
    // Mid-panel tabbing follows the default order
    assert_eq!(trap_wrap(Some(1), 4, false), None);
    assert_eq!(trap_wrap(Some(2), 4, true), None);
}

#[test]
fn shift_tab_wraps_first_to_last() {
    assert_eq!(trap_wrap(Some(0), 4, true), Some(3));
    assert_eq!(trap_wrap(Some(0), 1, true), Some(0));
}

#[test]
fn single_element_panel_cycles_onto_itself() {
    assert_eq!(trap_wrap(Some(0), 1, false), Some(0));
    assert_eq!(trap_wrap(Some(0), 1, true), Some(0));
}

#[test]
fn empty_panel_never_traps() {
    assert_eq!(trap_wrap(None, 0, false), None);
    assert_eq!(trap_wrap(None, 0, true), None);
    assert_eq!(trap_wrap(Some(0), 0, false), None);
}

#[test]
fn escaped_focus_is_pulled_back_into_the_panel() {
    assert_eq!(trap_wrap(None, 3, false), Some(0));
    assert_eq!(trap_wrap(None, 3, true), Some(2));
}
