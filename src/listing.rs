//! Listing Utilities
//!
//! Helper functions for list rendering: name search and page controls.

use std::ops::RangeInclusive;

use crate::models::Category;

/// Case-insensitive substring match on category names
pub fn filter_by_name<'a>(categories: &'a [Category], query: &str) -> Vec<&'a Category> {
    let needle = query.trim().to_lowercase();
    categories
        .iter()
        .filter(|category| needle.is_empty() || category.name.to_lowercase().contains(&needle))
        .collect()
}

/// Page buttons to render; empty when there are no pages
pub fn page_numbers(total_pages: u32) -> RangeInclusive<u32> {
    1..=total_pages
}

/// Keep `page` inside `[1, total_pages]` (page 1 when there are no pages)
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// The pagination bar is only shown for more than one page
pub fn shows_pagination(total_pages: u32) -> bool {
    total_pages > 1
}

pub fn has_previous(page: u32) -> bool {
    page > 1
}

pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}
