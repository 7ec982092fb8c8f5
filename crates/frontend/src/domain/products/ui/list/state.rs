//! Ürün sayfasının saf durumu: ızgara modu + bellek içi liste + sayfalama.

use contracts::domain::{Category, Product};

use crate::shared::paging::{Pager, PRODUCTS_PER_PAGE};

/// Izgaranın gösterdiği içerik. `Idle` yalnızca açılıştaki boş durumdur;
/// "ürün yok" yer tutucusu sadece `Products` modunda anlamlıdır.
#[derive(Debug, Clone, PartialEq)]
pub enum GridMode {
    Idle,
    Products,
    Categories(Vec<Category>),
}

/// Ardışık fetch'ler için monoton jeton. Yalnızca en son verilen jeton
/// günceldir; eskimiş bir jetonla dönen yanıt atılır.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RequestToken {
    latest: u64,
}

impl RequestToken {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}

#[derive(Debug, Clone)]
pub struct ProductsViewState {
    pub mode: GridMode,
    pub all_products: Vec<Product>,
    pub pager: Pager,
    pub error: Option<String>,
}

impl Default for ProductsViewState {
    fn default() -> Self {
        Self {
            mode: GridMode::Idle,
            all_products: Vec::new(),
            pager: Pager::new(PRODUCTS_PER_PAGE),
            error: None,
        }
    }
}

impl ProductsViewState {
    /// Listeyi değiştirir: sayfa 1'e döner, hata temizlenir.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.mode = GridMode::Products;
        self.all_products = products;
        self.pager.reset();
        self.error = None;
    }

    /// "Tüm kategoriler" görünümü: ürün listesi ve sayfalama temizlenir.
    pub fn show_categories(&mut self, categories: Vec<Category>) {
        self.mode = GridMode::Categories(categories);
        self.all_products.clear();
        self.pager.reset();
        self.error = None;
    }

    pub fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    pub fn page_items(&self) -> &[Product] {
        self.pager.page_items(&self.all_products)
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.all_products.len())
    }

    /// Sayfa düğmesi tıklaması: yeniden fetch yok, sadece dilim değişir.
    pub fn select_page(&mut self, page: usize) -> bool {
        self.pager.set_page(page, self.all_products.len())
    }

    /// Sayfalama yalnızca birden çok sayfalı ürün görünümünde görünür.
    pub fn pagination_visible(&self) -> bool {
        self.mode == GridMode::Products && self.error.is_none() && self.total_pages() > 1
    }
}
