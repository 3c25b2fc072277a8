/// Number of series per listing page.
pub const SERIES_PAGE_SIZE: u32 = 2;

/// Offset/limit window for a 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u32,
}

impl PageWindow {
    /// `None` for page numbers below 1; such pages are always empty.
    pub fn for_page(page_number: i64, page_size: u32) -> Option<Self> {
        if page_number < 1 || page_size == 0 {
            return None;
        }

        let offset = u64::try_from(page_number - 1)
            .ok()?
            .checked_mul(u64::from(page_size))?;

        Some(Self {
            offset,
            limit: page_size,
        })
    }

    /// Apply the window to an already ordered slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.limit as usize).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_pages_have_no_window() {
        assert_eq!(PageWindow::for_page(0, SERIES_PAGE_SIZE), None);
        assert_eq!(PageWindow::for_page(-3, SERIES_PAGE_SIZE), None);
    }

    #[test]
    fn pages_are_one_based() {
        let first = PageWindow::for_page(1, SERIES_PAGE_SIZE).unwrap();
        assert_eq!(first.offset, 0);
        let third = PageWindow::for_page(3, SERIES_PAGE_SIZE).unwrap();
        assert_eq!(third.offset, 4);
        assert_eq!(third.limit, 2);
    }

    #[test]
    fn slicing_past_the_end_is_empty() {
        let items = [1, 2, 3];
        let second = PageWindow::for_page(2, 2).unwrap();
        assert_eq!(second.slice(&items), &[3]);
        let fifth = PageWindow::for_page(5, 2).unwrap();
        assert!(fifth.slice(&items).is_empty());
        let huge = PageWindow::for_page(i64::MAX, 2);
        assert!(huge.is_none_or(|window| window.slice(&items).is_empty()));
    }
}
