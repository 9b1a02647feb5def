//! Client-side pagination
//!
//! Derives the visible page of a record set and the page-control layout
//! (numbered buttons plus ellipsis markers) from a fixed page size and a
//! requested page number. All computation is pure and deterministic; invalid
//! page requests are clamped into range rather than rejected, so the only
//! error condition is a degenerate page size at construction time.

use thiserror::Error;

/// Errors that can occur when constructing a [`Pager`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerError {
    /// Page size of zero cannot be sanitized into anything meaningful
    #[error("invalid page size: must be at least 1")]
    InvalidPageSize,
}

/// One renderable unit of pagination UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlItem {
    /// A numbered page button; `active` marks the current page
    PageButton {
        page: usize,
        active: bool,
    },
    /// A truncation marker bridging a run of omitted page numbers
    Ellipsis,
}

/// One page of records plus the context needed to render it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The visible slice, at most `page_size` records long
    pub records: &'a [T],
    /// The effective page after clamping, always in `[1, total_pages]`
    pub page: usize,
    /// Total page count, at least 1 even for an empty record set
    pub total_pages: usize,
}

impl<'a, T> Page<'a, T> {
    /// Whether a "previous page" step is possible from this page
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a "next page" step is possible from this page
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slices a fixed, ordered record set into display pages.
///
/// The pager never owns records and never mutates the current page; the
/// caller owns both and feeds requested page numbers in, receiving the
/// clamped effective page back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
}

impl Pager {
    /// Creates a pager. Fails fast on a zero page size.
    pub fn new(page_size: usize) -> Result<Self, PagerError> {
        if page_size == 0 {
            return Err(PagerError::InvalidPageSize);
        }
        Ok(Self { page_size })
    }

    /// The fixed page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages for `record_count` records. An empty record set still has
    /// one (empty) page so the UI always has something to render.
    pub fn total_pages(&self, record_count: usize) -> usize {
        record_count.div_ceil(self.page_size).max(1)
    }

    /// Computes the visible slice for `requested_page`.
    ///
    /// Out-of-range requests (zero, negative, or past the end) are clamped
    /// to the nearest valid page, never treated as errors, so callers cannot
    /// corrupt display state. The slices for pages `1..=total_pages` exactly
    /// partition `records`.
    pub fn page_of<'a, T>(&self, records: &'a [T], requested_page: i64) -> Page<'a, T> {
        let total_pages = self.total_pages(records.len());
        let page = clamp_page(requested_page, total_pages);

        // page <= ceil(len / size) guarantees start <= len, so the slice
        // bounds are always in range (start is 0 for the empty set).
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(records.len());

        Page {
            records: &records[start..end],
            page,
            total_pages,
        }
    }

    /// Lays out page controls: the first page, a window of `window_radius`
    /// pages around the current page, the last page, and a single ellipsis
    /// over each gap wider than one.
    ///
    /// Buttons appear in ascending page order and exactly one is active
    /// whenever `current_page` is in range.
    pub fn controls(
        &self,
        total_pages: usize,
        current_page: usize,
        window_radius: usize,
    ) -> Vec<ControlItem> {
        let total_pages = total_pages.max(1);

        // First page, then the interior window, then the last page. The
        // window is confined to [2, total_pages - 1] so the endpoints never
        // repeat.
        let mut pages = vec![1];
        let window_lo = current_page.saturating_sub(window_radius).max(2);
        let window_hi = current_page
            .saturating_add(window_radius)
            .min(total_pages.saturating_sub(1));
        pages.extend(window_lo..=window_hi);
        if total_pages > 1 {
            pages.push(total_pages);
        }

        let mut items = Vec::with_capacity(pages.len() + 2);
        let mut prev = 0;
        for page in pages {
            if prev > 0 && page - prev > 1 {
                items.push(ControlItem::Ellipsis);
            }
            items.push(ControlItem::PageButton {
                page,
                active: page == current_page,
            });
            prev = page;
        }
        items
    }
}

/// Applies a relative step (±1 from prev/next arrows) to the current page.
/// Steps that would leave `[1, total_pages]` are no-ops, matching disabled
/// arrow controls at the boundaries.
pub fn step(current_page: usize, delta: i64, total_pages: usize) -> usize {
    clamp_page(current_page as i64 + delta, total_pages.max(1))
}

fn clamp_page(requested: i64, total_pages: usize) -> usize {
    requested.clamp(1, total_pages as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<u32> {
        (0..n as u32).collect()
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert_eq!(Pager::new(0), Err(PagerError::InvalidPageSize));
        assert!(Pager::new(1).is_ok());
    }

    #[test]
    fn test_thirty_records_three_pages() {
        let data = records(30);
        let pager = Pager::new(10).unwrap();

        let first = pager.page_of(&data, 1);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.page, 1);
        assert_eq!(first.records, &data[0..10]);

        let last = pager.page_of(&data, 3);
        assert_eq!(last.records, &data[20..30]);

        // Requesting past the end clamps to the last page
        assert_eq!(pager.page_of(&data, 4), last);
    }

    #[test]
    fn test_empty_record_set_has_one_empty_page() {
        let data: Vec<u32> = Vec::new();
        let pager = Pager::new(10).unwrap();

        let page = pager.page_of(&data, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.records.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_short_final_page() {
        let data = records(25);
        let pager = Pager::new(10).unwrap();

        assert_eq!(pager.total_pages(data.len()), 3);
        assert_eq!(pager.page_of(&data, 2).records, &data[10..20]);

        let last = pager.page_of(&data, 3);
        assert_eq!(last.records.len(), 5);
        assert_eq!(last.records, &data[20..25]);
    }

    #[test]
    fn test_out_of_range_requests_clamp() {
        let data = records(30);
        let pager = Pager::new(10).unwrap();

        assert_eq!(pager.page_of(&data, -5), pager.page_of(&data, 1));
        assert_eq!(pager.page_of(&data, 0), pager.page_of(&data, 1));
        assert_eq!(pager.page_of(&data, 9999), pager.page_of(&data, 3));
    }

    #[test]
    fn test_pages_partition_record_set() {
        // Every page size x record count combination must yield slices that
        // reproduce the original sequence with no gaps or overlaps.
        for n in [0usize, 1, 9, 10, 11, 25, 30, 31] {
            for size in [1usize, 3, 10, 50] {
                let data = records(n);
                let pager = Pager::new(size).unwrap();
                let total = pager.total_pages(n);

                let mut rebuilt = Vec::new();
                for p in 1..=total {
                    let page = pager.page_of(&data, p as i64);
                    assert!(page.records.len() <= size);
                    rebuilt.extend_from_slice(page.records);
                }
                assert_eq!(rebuilt, data, "n={} size={}", n, size);
            }
        }
    }

    #[test]
    fn test_page_of_is_idempotent() {
        let data = records(30);
        let pager = Pager::new(10).unwrap();
        assert_eq!(pager.page_of(&data, 2), pager.page_of(&data, 2));
    }

    #[test]
    fn test_step_noops_at_boundaries() {
        assert_eq!(step(1, -1, 3), 1);
        assert_eq!(step(3, 1, 3), 3);
        assert_eq!(step(2, 1, 3), 3);
        assert_eq!(step(2, -1, 3), 1);
        assert_eq!(step(1, -1, 1), 1);
        assert_eq!(step(1, 1, 1), 1);
    }

    fn button(page: usize, active: bool) -> ControlItem {
        ControlItem::PageButton { page, active }
    }

    #[test]
    fn test_controls_window_with_both_ellipses() {
        let pager = Pager::new(10).unwrap();
        let items = pager.controls(10, 5, 1);
        assert_eq!(
            items,
            vec![
                button(1, false),
                ControlItem::Ellipsis,
                button(4, false),
                button(5, true),
                button(6, false),
                ControlItem::Ellipsis,
                button(10, false),
            ]
        );
    }

    #[test]
    fn test_controls_small_set_no_ellipsis() {
        let pager = Pager::new(10).unwrap();
        let items = pager.controls(3, 1, 1);
        assert_eq!(
            items,
            vec![button(1, true), button(2, false), button(3, false)]
        );
    }

    #[test]
    fn test_controls_single_page() {
        let pager = Pager::new(10).unwrap();
        assert_eq!(pager.controls(1, 1, 1), vec![button(1, true)]);
    }

    #[test]
    fn test_controls_boundary_omits_adjacent_ellipsis() {
        let pager = Pager::new(10).unwrap();

        // Current page near the start: no leading ellipsis
        assert_eq!(
            pager.controls(10, 2, 1),
            vec![
                button(1, false),
                button(2, true),
                button(3, false),
                ControlItem::Ellipsis,
                button(10, false),
            ]
        );

        // Current page at the end: no trailing ellipsis
        assert_eq!(
            pager.controls(10, 10, 1),
            vec![
                button(1, false),
                ControlItem::Ellipsis,
                button(9, false),
                button(10, true),
            ]
        );
    }

    #[test]
    fn test_controls_exactly_one_active() {
        let pager = Pager::new(10).unwrap();
        for total in 1..=12usize {
            for current in 1..=total {
                let active = pager
                    .controls(total, current, 1)
                    .iter()
                    .filter(|item| matches!(item, ControlItem::PageButton { active: true, .. }))
                    .count();
                assert_eq!(active, 1, "total={} current={}", total, current);
            }
        }
    }

    #[test]
    fn test_controls_strictly_ascending() {
        let pager = Pager::new(10).unwrap();
        for total in 1..=12usize {
            for current in 1..=total {
                let mut prev = 0;
                for item in pager.controls(total, current, 1) {
                    if let ControlItem::PageButton { page, .. } = item {
                        assert!(page > prev, "total={} current={}", total, current);
                        prev = page;
                    }
                }
            }
        }
    }
}
