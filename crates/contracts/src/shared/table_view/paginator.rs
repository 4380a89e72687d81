use std::ops::Range;

/// Навигация по страницам
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
    To(usize),
}

/// Элемент окна номеров страниц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// 1-based paginator over a list of `total` items.
///
/// `page` always lies in `1..=display_total()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `ceil(total / page_size)`, zero for an empty list
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Page count shown to the user, an empty list is one empty page
    pub fn display_total(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Update the item count and clamp the current page.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.clamp(1, self.display_total());
    }

    /// Changing the page size starts again from page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Index range of the visible page within the list.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.display_total()
    }

    pub fn navigate(&mut self, nav: PageNav) {
        self.page = match nav {
            PageNav::First => 1,
            PageNav::Prev if self.has_prev() => self.page - 1,
            PageNav::Next if self.has_next() => self.page + 1,
            PageNav::Prev | PageNav::Next => self.page,
            PageNav::Last => self.display_total(),
            PageNav::To(page) => page.clamp(1, self.display_total()),
        };
    }

    /// Page buttons: up to `2 * radius + 1` numbers around the current page,
    /// plus the first and last page with gaps where the window does not reach them.
    pub fn window(&self, radius: usize) -> Vec<PageItem> {
        let total = self.display_total();
        let width = 2 * radius + 1;

        let mut start = self.page.saturating_sub(radius).max(1);
        let end = (start + width - 1).min(total);
        start = (end + 1).saturating_sub(width).max(1);

        let mut items = Vec::with_capacity(width + 4);
        if start > 1 {
            items.push(PageItem::Page(1));
            if start > 2 {
                items.push(PageItem::Gap);
            }
        }
        items.extend((start..=end).map(PageItem::Page));
        if end < total {
            if end + 1 < total {
                items.push(PageItem::Gap);
            }
            items.push(PageItem::Page(total));
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(items: &[PageItem]) -> String {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page(n) => n.to_string(),
                PageItem::Gap => "..".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for size in 1..=12 {
            for n in 0..=40 {
                let mut p = Paginator::new(size);
                p.set_total(n);
                assert_eq!(p.total_pages(), (n + size - 1) / size);
                assert!(p.display_total() >= 1);
                p.navigate(PageNav::Last);
                assert!(p.page() <= p.display_total());
                assert!(p.range().end <= n);
            }
        }
    }

    #[test]
    fn test_25_items_by_10() {
        let mut p = Paginator::new(10);
        p.set_total(25);
        assert_eq!(p.range(), 0..10);
        assert!(!p.has_prev());

        p.navigate(PageNav::To(3));
        assert_eq!(p.range(), 20..25);
        assert!(!p.has_next());

        p.navigate(PageNav::Next);
        assert_eq!(p.page(), 3);
        p.navigate(PageNav::Prev);
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn test_empty_list_is_one_empty_page() {
        let mut p = Paginator::new(10);
        p.set_total(0);
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.display_total(), 1);
        assert_eq!(p.page(), 1);
        assert!(p.range().is_empty());
        assert!(!p.has_next());
    }

    #[test]
    fn test_jump_clamps_and_shrink_clamps() {
        let mut p = Paginator::new(10);
        p.set_total(95);
        p.navigate(PageNav::To(42));
        assert_eq!(p.page(), 10);
        p.navigate(PageNav::To(0));
        assert_eq!(p.page(), 1);

        p.navigate(PageNav::Last);
        p.set_total(31);
        assert_eq!(p.page(), 4);
    }

    #[test]
    fn test_page_size_change_resets() {
        let mut p = Paginator::new(10);
        p.set_total(100);
        p.navigate(PageNav::To(5));
        p.set_page_size(25);
        assert_eq!(p.page(), 1);
        assert_eq!(p.display_total(), 4);
        p.set_page_size(0);
        assert_eq!(p.page_size(), 1);
    }

    #[test]
    fn test_window_slides() {
        let mut p = Paginator::new(10);
        p.set_total(100);
        assert_eq!(pages(&p.window(2)), "1 2 3 4 5 .. 10");

        p.navigate(PageNav::To(5));
        assert_eq!(pages(&p.window(2)), "1 .. 3 4 5 6 7 .. 10");

        p.navigate(PageNav::To(4));
        assert_eq!(pages(&p.window(2)), "1 2 3 4 5 6 .. 10");

        p.navigate(PageNav::Last);
        assert_eq!(pages(&p.window(2)), "1 .. 6 7 8 9 10");

        p.set_total(30);
        assert_eq!(pages(&p.window(2)), "1 2 3");

        p.set_total(0);
        assert_eq!(pages(&p.window(2)), "1");
    }
}
