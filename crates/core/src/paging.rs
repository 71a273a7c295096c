//! Fixed-size, 1-based pagination with wrap-around stepping.

/// Lessons shown per page of the lesson list.
pub const LESSONS_PER_PAGE: usize = 5;

/// One page cut out of a longer list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Page actually shown, after clamping the request.
    pub page: usize,
    /// Never less than 1, even for an empty list.
    pub total_pages: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn next(&self) -> usize {
        next_page(self.page, self.total_pages)
    }

    #[must_use]
    pub fn previous(&self) -> usize {
        previous_page(self.page, self.total_pages)
    }
}

#[must_use]
pub fn total_pages(len: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    len.div_ceil(per_page).max(1)
}

/// Clamp `requested` into `1..=total_pages`.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Page after `page`, wrapping from the last page to the first.
#[must_use]
pub fn next_page(page: usize, total_pages: usize) -> usize {
    if page < total_pages { page + 1 } else { 1 }
}

/// Page before `page`, wrapping from the first page to the last.
#[must_use]
pub fn previous_page(page: usize, total_pages: usize) -> usize {
    if page > 1 { page - 1 } else { total_pages.max(1) }
}

/// Slice out page `requested` (1-based, clamped) of `items`.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], requested: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_pages = total_pages(items.len(), per_page);
    let page = clamp_page(requested, total_pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_items_make_three_pages() {
        let items: Vec<u32> = (1..=12).collect();
        let last = paginate(&items, 3, LESSONS_PER_PAGE);
        assert_eq!(last.total_pages, 3);
        assert_eq!(last.items, vec![11, 12]);
        assert_eq!(last.next(), 1);
        assert_eq!(last.previous(), 2);
    }

    #[test]
    fn requests_are_clamped() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 0, 5).page, 1);
        assert_eq!(paginate(&items, 99, 5).page, 3);
        assert_eq!(paginate(&items, 99, 5).items, vec![11, 12]);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let page = paginate::<u32>(&[], 4, 5);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.next(), 1);
        assert_eq!(page.previous(), 1);
    }

    #[test]
    fn stepping_wraps_both_ways() {
        assert_eq!(previous_page(1, 4), 4);
        assert_eq!(next_page(4, 4), 1);
        assert_eq!(next_page(2, 4), 3);
        assert_eq!(previous_page(3, 4), 2);
    }
}
