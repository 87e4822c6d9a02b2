/// Trailing segment of a location path. An empty segment (site root or a
/// trailing slash) maps to the index page.
pub fn page_from_path(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some("") | None => "index.html",
        Some(seg) => seg,
    }
}

/// Exact-match test for a nav link's href against the current page name.
/// No prefix or partial matching.
pub fn href_is_current(href: &str, page: &str) -> bool {
    href == page
}

/// Focus-trap wrap decision for Tab inside an open panel.
///
/// `focused` is the index of the currently focused element among the panel's
/// focusable elements, or `None` when focus is not inside the panel. Returns
/// the index that must receive focus instead, or `None` to let the default
/// tab order run.
pub fn trap_wrap(focused: Option<usize>, len: usize, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match focused {
        Some(0) if shift => Some(len - 1),
        Some(i) if !shift && i == len - 1 => Some(0),
        Some(_) => None,
        // Focus escaped the panel while it is open: pull it back to an end.
        None => Some(if shift { len - 1 } else { 0 }),
    }
}
