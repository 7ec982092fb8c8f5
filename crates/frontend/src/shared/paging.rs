//! Bellek içi sayfalama: tüm liste istemcide tutulur, dilimlenerek çizilir.

/// Ürün ızgarasının sabit sayfa boyutu.
pub const PRODUCTS_PER_PAGE: usize = 12;

/// 1 tabanlı sayfa imleci. Liste değiştiğinde `reset` ile 1'e döner;
/// `set_page` yalnızca `[1, total_pages]` aralığını kabul eder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub page_size: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Geçerli sayfanın dilimi: `[(page-1)*size, min(page*size, len))`.
    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Aralık dışı sayfa numarası yok sayılır.
    pub fn set_page(&mut self, page: usize, count: usize) -> bool {
        if page >= 1 && page <= self.total_pages(count) {
            self.page = page;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling() {
        let pager = Pager::new(PRODUCTS_PER_PAGE);
        assert_eq!(pager.total_pages(0), 0);
        assert_eq!(pager.total_pages(12), 1);
        assert_eq!(pager.total_pages(13), 2);
        assert_eq!(pager.total_pages(24), 2);
    }

    #[test]
    fn slices_the_requested_page() {
        let items: Vec<usize> = (1..=15).collect();
        let mut pager = Pager::new(PRODUCTS_PER_PAGE);
        assert_eq!(pager.page_items(&items), (1..=12).collect::<Vec<_>>());
        assert!(pager.set_page(2, items.len()));
        assert_eq!(pager.page_items(&items), vec![13, 14, 15]);
    }

    #[test]
    fn out_of_range_page_is_ignored() {
        let items: Vec<usize> = (1..=15).collect();
        let mut pager = Pager::new(PRODUCTS_PER_PAGE);
        assert!(!pager.set_page(0, items.len()));
        assert!(!pager.set_page(3, items.len()));
        assert_eq!(pager.page, 1);
    }

    #[test]
    fn empty_list_yields_empty_slice() {
        let pager = Pager::new(PRODUCTS_PER_PAGE);
        let items: Vec<usize> = vec![];
        assert!(pager.page_items(&items).is_empty());
    }
}
