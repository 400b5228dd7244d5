// file: src/refine/paginate.rs
// description: client-side pagination windowing and page-label generation
// reference: pager behavior kept bit-for-bit with the legacy frontend

use crate::models::PageLabel;

/// Window the outer result list to page `page_number` (1-based). Returns the
/// slice `[(p-1)*len, p*len)` clipped to bounds; an out-of-range page yields
/// an empty slice rather than an error. Recomputed on every page change,
/// never persisted.
pub fn page_window<T>(results: &[T], page_length: usize, page_number: usize) -> &[T] {
    if page_number == 0 {
        return &[];
    }

    let start = (page_number - 1).saturating_mul(page_length).min(results.len());
    let end = start.saturating_add(page_length).min(results.len());
    &results[start..end]
}

/// Total pages needed to show `total_results` at `page_length` per page.
pub fn total_pages(total_results: usize, page_length: usize) -> usize {
    if page_length == 0 {
        return 0;
    }
    total_results.div_ceil(page_length)
}

/// Generate the pager label row for `current_page` of `total_pages`.
///
/// Two stages, both preserved exactly:
/// 1. Push page 1 and an ellipsis once `current_page > 2`, then the
///    neighbors `current_page - 1` / `current_page` / `current_page + 1`
///    (where they exist), an ellipsis when more pages follow, and the final
///    page while `current_page < 9`. The `< 9` cutoff for showing the last
///    page is asymmetric on purpose; it is observed behavior, not a general
///    "near the end" rule.
/// 2. Insert an ellipsis between any two consecutive numeric labels that
///    differ by more than 1.
///
/// `total_pages` of 0 or 1 is tolerated: the current page label is always
/// emitted, and a single page produces no ellipses.
pub fn page_labels(current_page: usize, total_pages: usize) -> Vec<PageLabel> {
    let mut labels: Vec<PageLabel> = Vec::new();

    if current_page > 2 {
        labels.push(PageLabel::Number(1));
        labels.push(PageLabel::Ellipsis);
    }
    if current_page > 1 {
        labels.push(PageLabel::Number(current_page - 1));
    }
    labels.push(PageLabel::Number(current_page));
    if current_page < total_pages {
        labels.push(PageLabel::Number(current_page + 1));
    }

    if total_pages > current_page + 1 {
        labels.push(PageLabel::Ellipsis);
    }
    if total_pages > 1 && current_page < 9 {
        labels.push(PageLabel::Number(total_pages));
    }

    let mut final_labels: Vec<PageLabel> = Vec::with_capacity(labels.len() + 2);
    for label in labels {
        if let (PageLabel::Number(n), Some(PageLabel::Number(prev))) =
            (label, final_labels.last().copied())
        {
            // Signed difference: a decreasing sequence is possible when the
            // current page is out of range and must not underflow.
            if n as i64 - prev as i64 > 1 {
                final_labels.push(PageLabel::Ellipsis);
            }
        }
        final_labels.push(label);
    }

    final_labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use PageLabel::{Ellipsis, Number};

    #[test]
    fn test_first_page_window() {
        let results: Vec<usize> = (0..25).collect();
        assert_eq!(page_window(&results, 10, 1), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_last_partial_page_window() {
        let results: Vec<usize> = (0..25).collect();
        assert_eq!(page_window(&results, 10, 3), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let results: Vec<usize> = (0..25).collect();
        assert!(page_window(&results, 10, 4).is_empty());
        assert!(page_window(&results, 10, 0).is_empty());
        assert!(page_window(&results, 10, usize::MAX).is_empty());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn test_single_page_has_single_label() {
        assert_eq!(page_labels(1, 1), vec![Number(1)]);
    }

    #[test]
    fn test_zero_total_pages_tolerated() {
        assert_eq!(page_labels(1, 0), vec![Number(1)]);
    }

    #[test]
    fn test_adjacent_final_page_duplicates_label() {
        // When total == current + 1 the final page is pushed twice, once as
        // the right neighbor and once as the last-page label. Observed
        // legacy behavior, kept.
        assert_eq!(page_labels(1, 2), vec![Number(1), Number(2), Number(2)]);
        assert_eq!(page_labels(2, 2), vec![Number(1), Number(2), Number(2)]);
    }

    #[test]
    fn test_middle_page_shows_both_ends() {
        assert_eq!(
            page_labels(5, 10),
            vec![
                Number(1),
                Ellipsis,
                Number(4),
                Number(5),
                Number(6),
                Ellipsis,
                Number(10),
            ]
        );
    }

    #[test]
    fn test_first_page_of_many() {
        assert_eq!(
            page_labels(1, 10),
            vec![Number(1), Number(2), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn test_asymmetric_last_page_cutoff() {
        // The final page label disappears once the current page reaches 9.
        assert!(page_labels(8, 20).contains(&Number(20)));
        assert!(!page_labels(9, 20).contains(&Number(20)));
        assert!(!page_labels(15, 20).contains(&Number(20)));
    }

    #[test]
    fn test_third_page_keeps_legacy_spurious_ellipsis() {
        // Stage 1 pushes the ellipsis before stage 2 runs, so page 3 of 4
        // shows "1 ... 2 3 4 4" even though 1 and 2 are adjacent (and the
        // final page doubles up as the right neighbor).
        assert_eq!(
            page_labels(3, 4),
            vec![Number(1), Ellipsis, Number(2), Number(3), Number(4), Number(4)]
        );
    }
}
