use serde::Serialize;

/// One bounded window over a derived sequence, plus the bookkeeping the
/// table footer needs ("Showing X–Y of Z", Prev/Next enablement).
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 0-based window bounds, `[start_index, end_index)`.
    pub start_index: usize,
    pub end_index: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Re-shapes the page items (e.g. into an API response type) without
    /// touching the window bookkeeping.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            start_index: self.start_index,
            end_index: self.end_index,
            has_prev: self.has_prev,
            has_next: self.has_next,
        }
    }
}

/// Slices one page out of `items`. Pages are 1-based; a requested page past
/// the end resets to page 1, which covers the case where a filter change
/// shrinks the result set under the current page.
pub fn paginate<T: Clone>(items: &[T], per_page: usize, page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let mut current_page = page.max(1);
    if current_page > total_pages {
        current_page = 1;
    }

    let start_index = (current_page - 1) * per_page;
    let start_index = start_index.min(total_items);
    let end_index = (start_index + per_page).min(total_items);

    Page {
        items: items[start_index..end_index].to_vec(),
        current_page,
        total_pages,
        total_items,
        start_index,
        end_index,
        has_prev: current_page > 1,
        has_next: total_pages > 0 && current_page < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fifteen_items_into_three_pages_of_five() {
        let items: Vec<u32> = (0..15).collect();
        let page = paginate(&items, 5, 3);

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.start_index, 10);
        assert_eq!(page.end_index, 15);
        assert_eq!(page.items, vec![10, 11, 12, 13, 14]);
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn first_page_disables_prev() {
        let items: Vec<u32> = (0..15).collect();
        let page = paginate(&items, 5, 1);
        assert!(!page.has_prev);
        assert!(page.has_next);
    }

    #[test]
    fn partial_last_page() {
        let items: Vec<u32> = (0..12).collect();
        let page = paginate(&items, 5, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![10, 11]);
        assert_eq!(page.end_index, 12);
    }

    #[test]
    fn page_past_the_end_resets_to_first() {
        let items: Vec<u32> = (0..12).collect();
        let page = paginate(&items, 5, 9);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.start_index, 0);
        assert_eq!(page.items, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_input_has_zero_pages() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 10, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
        assert!(page.items.is_empty());
        assert_eq!((page.start_index, page.end_index), (0, 0));
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn window_invariants_hold_across_inputs() {
        for len in [0usize, 1, 4, 5, 8, 15, 23] {
            let items: Vec<usize> = (0..len).collect();
            for per_page in [1usize, 5, 8, 10] {
                for page in [1usize, 2, 3, 7] {
                    let p = paginate(&items, per_page, page);
                    assert!(p.start_index <= p.end_index);
                    assert!(p.end_index <= len);
                    assert_eq!(p.items.len(), p.end_index - p.start_index);
                    assert_eq!(p.total_pages == 0, len == 0);
                    if len > 0 {
                        assert_eq!(p.total_pages, len.div_ceil(per_page));
                        assert!(!p.items.is_empty());
                    }
                }
            }
        }
    }
}
