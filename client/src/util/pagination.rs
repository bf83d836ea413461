//! "Show first N, then all" helpers for the gallery sections.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Items to render: everything when `expanded`, else the first `initial`.
pub fn visible_items<T>(items: &[T], expanded: bool, initial: usize) -> &[T] {
    if expanded { items } else { &items[..initial.min(items.len())] }
}

/// Whether the expand/collapse toggle is worth showing.
pub fn has_more<T>(items: &[T], initial: usize) -> bool {
    items.len() > initial
}

/// Label for the expand/collapse toggle.
pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded { "Show Less" } else { "View More" }
}
