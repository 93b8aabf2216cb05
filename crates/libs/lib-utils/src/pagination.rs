//! # Pagination Utilities
//!
//! Page-window generation and slice index math for paginated tables.

/// Generate the strip of page numbers shown under a table, with `None`
/// marking a gap ("...") between detached ranges.
///
/// When `total` fits within `max_visible`, every page is listed. Otherwise
/// the strip is: first page, a gap if the window is detached from it, the
/// window `current-1..=current+1` clamped to `2..=total-1`, a gap if the
/// window is detached from the end, and the last page.
pub fn page_window(current: u32, total: u32, max_visible: u32) -> Vec<Option<u32>> {
    let mut pages = Vec::new();

    if total == 0 {
        return pages;
    }

    if total <= max_visible {
        for page in 1..=total {
            pages.push(Some(page));
        }
        return pages;
    }

    pages.push(Some(1));

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);

    if start > 2 {
        pages.push(None);
    }

    for page in start..=end {
        pages.push(Some(page));
    }

    if end < total - 1 {
        pages.push(None);
    }

    pages.push(Some(total));

    pages
}

/// Compute the half-open index range `[start, end)` of one page of a list
/// of `total` items, along with the page count.
pub fn slice_bounds(page: u32, per_page: u32, total: usize) -> (usize, usize, u32) {
    let per_page = per_page.max(1);
    let total_pages = total.div_ceil(per_page as usize) as u32;

    let start = ((page.max(1) - 1) as usize).saturating_mul(per_page as usize);
    let start = start.min(total);
    let end = (start + per_page as usize).min(total);

    (start, end, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_all_pages_when_few() {
        assert_eq!(
            page_window(2, 4, 5),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn test_window_start() {
        // Current page near the start: no leading gap.
        assert_eq!(
            page_window(1, 10, 5),
            vec![Some(1), Some(2), None, Some(10)]
        );
        assert_eq!(
            page_window(2, 10, 5),
            vec![Some(1), Some(2), Some(3), None, Some(10)]
        );
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(
            page_window(5, 10, 5),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
    }

    #[test]
    fn test_window_end() {
        assert_eq!(
            page_window(10, 10, 5),
            vec![Some(1), None, Some(9), Some(10)]
        );
    }

    #[test]
    fn test_window_empty() {
        assert!(page_window(1, 0, 5).is_empty());
    }

    #[test]
    fn test_slice_bounds_basic() {
        assert_eq!(slice_bounds(1, 10, 25), (0, 10, 3));
        assert_eq!(slice_bounds(3, 10, 25), (20, 25, 3));
    }

    #[test]
    fn test_slice_bounds_out_of_range_page() {
        // Past the last page: empty slice, totals still correct.
        assert_eq!(slice_bounds(9, 10, 25), (25, 25, 3));
    }

    #[test]
    fn test_slice_bounds_empty_list() {
        assert_eq!(slice_bounds(1, 10, 0), (0, 0, 0));
    }
}
