use leptos::prelude::*;

use crate::domain::products::ui::details::ProductDetailPage;
use crate::domain::products::ui::list::ProductsPage;
use crate::domain::quote::form::QuotePage;
use crate::shared::query;

/// Sayfa seçimi: tek wasm paketi, sayfalar pathname üzerinden ayrışır.
/// Router bileşenleri kullanılmaz; geçmiş yönetimi `shared::query`de.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let path = query::location_pathname();

    if path.contains("urun-detay") {
        view! { <ProductDetailPage /> }.into_any()
    } else if path.contains("teklif") {
        view! { <QuotePage /> }.into_any()
    } else {
        view! { <ProductsPage /> }.into_any()
    }
}
