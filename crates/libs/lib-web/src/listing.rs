//! # List Endpoint Plumbing
//!
//! The service layer returns complete collections; this module applies the
//! common `ListQuery` (search, filters, page, per_page) on the way out and
//! wraps the slice in the `Page` envelope, pagination strip included.

use lib_utils::pagination::{page_window, slice_bounds};
use shared::dto::page::{ListQuery, Page, PageMark};

/// Page numbers shown in the strip before gaps are inserted.
const MAX_VISIBLE_MARKS: u32 = 5;

/// Case-insensitive substring match used by every `q=` filter.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Slice one page out of an already-filtered list.
///
/// An out-of-range page yields empty items with correct totals; `page` and
/// `per_page` arrive pre-clamped by [`ListQuery`].
pub fn paginate<T: Clone>(items: Vec<T>, query: &ListQuery) -> Page<T> {
    let page = query.page();
    let per_page = query.per_page();

    let total_items = items.len();
    let (start, end, total_pages) = slice_bounds(page, per_page, total_items);

    let marks = page_window(page, total_pages, MAX_VISIBLE_MARKS)
        .into_iter()
        .map(|mark| match mark {
            Some(n) => PageMark::Page(n),
            None => PageMark::gap(),
        })
        .collect();

    Page {
        items: items[start..end].to_vec(),
        page,
        per_page,
        total_items: total_items as u64,
        total_pages,
        marks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: u32, per_page: u32) -> ListQuery {
        ListQuery {
            page: Some(page),
            per_page: Some(per_page),
            ..ListQuery::default()
        }
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("SPELL BOUND vintage witchcraft", "spell"));
        assert!(contains_ci("Tomb of the Sun King", "SUN"));
        assert!(!contains_ci("Tomb of the Sun King", "moon"));
    }

    #[test]
    fn test_paginate_slices_and_counts() {
        let page = paginate((1..=25).collect::<Vec<u32>>(), &query(2, 10));
        assert_eq!(page.items, (11..=20).collect::<Vec<u32>>());
        assert_eq!(page.total_items, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(
            page.marks,
            vec![PageMark::Page(1), PageMark::Page(2), PageMark::Page(3)]
        );
    }

    #[test]
    fn test_paginate_inserts_gaps() {
        let page = paginate((1..=100).collect::<Vec<u32>>(), &query(5, 10));
        assert_eq!(
            page.marks,
            vec![
                PageMark::Page(1),
                PageMark::gap(),
                PageMark::Page(4),
                PageMark::Page(5),
                PageMark::Page(6),
                PageMark::gap(),
                PageMark::Page(10),
            ]
        );
    }

    #[test]
    fn test_paginate_past_the_end() {
        let page = paginate(vec![1, 2, 3], &query(9, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_empty_list() {
        let page = paginate(Vec::<u32>::new(), &ListQuery::default());
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert!(page.marks.is_empty());
    }
}
