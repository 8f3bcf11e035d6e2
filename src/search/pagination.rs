//! Client-side pagination over a fully fetched result set

use std::ops::Range;

/// Page sizes offered by the dashboard
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// Current page and page size
///
/// Pages are 1-based. The page never leaves `[1, total_pages]`; with no
/// results it stays at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    size: usize,
}

impl Pager {
    /// Start on page 1 with `size` items per page (at least 1)
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            page: 1,
            size: size.max(1),
        }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of pages needed for `total` items
    #[must_use]
    pub const fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.size)
    }

    /// Index range of the current page within `total` items
    #[must_use]
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.size).min(total);
        let end = (start + self.size).min(total);
        start..end
    }

    /// The current page of `items`
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// Advance one page, stopping at the last page
    pub fn next(&mut self, total: usize) {
        self.page = (self.page + 1).min(self.total_pages(total).max(1));
    }

    /// Go back one page, stopping at page 1
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Jump to `page`, clamped to the valid range
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.total_pages(total).max(1));
    }

    /// Back to page 1
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Change the page size; always returns to page 1
    pub fn set_size(&mut self, size: usize) {
        self.size = size.max(1);
        self.reset();
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZES[0])
    }
}

/// The offered size after (or before) `current`, wrapping around
#[must_use]
pub fn cycle_page_size(current: usize, forward: bool) -> usize {
    let index = PAGE_SIZES.iter().position(|s| *s == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % PAGE_SIZES.len()
    } else {
        (index + PAGE_SIZES.len() - 1) % PAGE_SIZES.len()
    };
    PAGE_SIZES[next]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 0)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(100, 20, 5)]
    #[case(101, 50, 3)]
    fn test_total_pages(#[case] total: usize, #[case] size: usize, #[case] expected: usize) {
        assert_eq!(Pager::new(size).total_pages(total), expected);
    }

    #[test]
    fn test_page_stays_in_bounds_for_any_walk() {
        for size in 1usize..=7 {
            for total in 0usize..=30 {
                let mut pager = Pager::new(size);
                let pages = total.div_ceil(size);
                for _ in 0..(pages + 3) {
                    pager.next(total);
                    assert!(pager.page() >= 1 && pager.page() <= pages.max(1));
                }
                assert_eq!(pager.page(), pages.max(1));
                for _ in 0..(pages + 3) {
                    pager.prev();
                    assert!(pager.page() >= 1);
                }
                assert_eq!(pager.page(), 1);
            }
        }
    }

    #[test]
    fn test_slice_pages() {
        let items: Vec<usize> = (0..25).collect();
        let mut pager = Pager::new(10);

        assert_eq!(pager.slice(&items), &items[0..10]);
        pager.next(items.len());
        assert_eq!(pager.slice(&items), &items[10..20]);
        pager.next(items.len());
        assert_eq!(pager.slice(&items), &items[20..25]);
        pager.next(items.len());
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn test_slice_empty() {
        let items: Vec<u8> = Vec::new();
        let pager = Pager::new(10);
        assert!(pager.slice(&items).is_empty());
        assert_eq!(pager.range(0), 0..0);
    }

    #[test]
    fn test_set_size_resets_page() {
        let mut pager = Pager::new(10);
        pager.next(50);
        pager.next(50);
        assert_eq!(pager.page(), 3);

        pager.set_size(20);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.size(), 20);
    }

    #[test]
    fn test_zero_size_is_raised_to_one() {
        let pager = Pager::new(0);
        assert_eq!(pager.size(), 1);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut pager = Pager::new(10);
        pager.go_to(9, 35);
        assert_eq!(pager.page(), 4);
        pager.go_to(0, 35);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_has_next_prev() {
        let mut pager = Pager::new(10);
        assert!(!pager.has_prev());
        assert!(pager.has_next(11));
        assert!(!pager.has_next(10));
        pager.next(11);
        assert!(pager.has_prev());
    }

    #[test]
    fn test_cycle_page_size() {
        assert_eq!(cycle_page_size(10, true), 20);
        assert_eq!(cycle_page_size(100, true), 10);
        assert_eq!(cycle_page_size(10, false), 100);
        assert_eq!(cycle_page_size(33, true), 20);
    }
}
