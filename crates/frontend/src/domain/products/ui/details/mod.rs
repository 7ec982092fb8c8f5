pub mod markup;

use contracts::domain::{Product, ProductVariant};
use contracts::shared::StoreError;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::categories::api as categories_api;
use crate::domain::products::api::{self as products_api, ProductKey};
use crate::shared::query;
use crate::system::store::StoreClient;
use self::markup::variant_rows_html;

const FALLBACK_IMAGE: &str = "assets/img/products/product2.png";
const WHATSAPP_PHONE: &str = "+905413851170";

#[derive(Debug, Clone, PartialEq)]
enum DetailState {
    Loading,
    NotFound,
    Ready(DetailModel),
}

#[derive(Debug, Clone, PartialEq)]
struct DetailModel {
    product: Product,
    image_src: String,
    category_label: String,
    category_key: String,
    variants: Vec<ProductVariant>,
}

/// Ürün detay sayfası: `?slug=` veya `?id=` ile tek ürün.
///
/// Zorunlu adımdaki her hata "bulunamadı" görünümüne düşer; sayfa hiçbir
/// koşulda yükleniyor durumunda asılı kalmaz.
#[component]
#[allow(non_snake_case)]
pub fn ProductDetailPage() -> impl IntoView {
    let client = use_context::<StoreClient>().expect("StoreClient not found in context");
    let state = RwSignal::new(DetailState::Loading);

    spawn_local(async move {
        let key = ProductKey::from_params(
            query::location_param("id"),
            query::location_param("slug"),
        );
        let Some(key) = key else {
            log::error!("geçerli bir id veya slug parametresi bekleniyor");
            state.set(DetailState::NotFound);
            return;
        };

        match load_detail(&client, &key).await {
            Ok(model) => {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title(&format!("{} | Şimşek Yapı", model.product.name));
                }
                state.set(DetailState::Ready(model));
            }
            Err(e) => {
                log::error!("ürün detayı yüklenemedi: {}", e);
                state.set(DetailState::NotFound);
            }
        }
    });

    view! {
        {move || match state.get() {
            DetailState::Loading => view! {
                <section class="product-detail section">
                    <p class="text-muted">"Yükleniyor..."</p>
                </section>
            }
            .into_any(),
            DetailState::NotFound => view! {
                <section class="product-detail section">
                    <div class="container">
                        <h1 id="productTitle">"Ürün Bulunamadı"</h1>
                        <table class="variants-table">
                            <tbody id="variantTbody">
                                <tr>
                                    <td colspan="2" class="text-danger">"Tablo yüklenemedi."</td>
                                </tr>
                            </tbody>
                        </table>
                    </div>
                </section>
            }
            .into_any(),
            DetailState::Ready(model) => view! { <DetailView model=model /> }.into_any(),
        }}
    }
}

/// Ürün (zorunlu) → kategori (opsiyonel) → varyantlar (opsiyonel).
/// Kategori ve varyant hataları loglanır ve sayfayı düşürmez.
async fn load_detail(client: &StoreClient, key: &ProductKey) -> Result<DetailModel, StoreError> {
    let product = products_api::find_one(client, key).await?;

    // Depoya göreli yollar tam public URL'ye çevrilir
    let image_src = product
        .image_url
        .clone()
        .filter(|url| !url.is_empty())
        .map(|url| client.public_image_url(&url))
        .unwrap_or_else(|| FALLBACK_IMAGE.to_string());

    let (category_label, category_key) = match product.category_id {
        Some(category_id) => match categories_api::find_category(client, category_id).await {
            Ok(category) => (category.name.clone(), category.link_key()),
            Err(e) => {
                log::warn!("kategori okunamadı: {}", e);
                ("Kategori".to_string(), category_id.to_string())
            }
        },
        None => ("Kategori".to_string(), String::new()),
    };

    let variants = match products_api::list_variants(client, product.id).await {
        Ok(rows) => rows,
        Err(e) => {
            // Varyant hatası ölümcül değil: sıfır varyant gibi davran
            log::warn!("varyant okunamadı: {}", e);
            Vec::new()
        }
    };

    Ok(DetailModel {
        product,
        image_src,
        category_label,
        category_key,
        variants,
    })
}

#[component]
#[allow(non_snake_case)]
fn DetailView(model: DetailModel) -> impl IntoView {
    let (image_src, set_image_src) = signal(model.image_src.clone());

    let category_href = if model.category_key.is_empty() {
        "urunler.html".to_string()
    } else {
        format!(
            "urunler.html?category={}",
            urlencoding::encode(&model.category_key)
        )
    };
    let whatsapp_href = format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_PHONE,
        urlencoding::encode(&format!(
            "Merhaba, {} hakkında daha fazla bilgi almak istiyorum.",
            model.product.name
        ))
    );

    view! {
        <section class="product-detail section">
            <div class="container">
                <nav class="breadcrumb">
                    <a id="categoryLink" href=category_href>{model.category_label.clone()}</a>
                </nav>
                <h1 id="productTitle">{model.product.name.clone()}</h1>
                <img
                    id="mainImage"
                    class="img-fluid"
                    src=move || image_src.get()
                    alt=model.product.name.clone()
                    on:error=move |_| set_image_src.set(FALLBACK_IMAGE.to_string())
                />
                <a id="whatsappBtn" class="btn-whatsapp" href=whatsapp_href>
                    "WhatsApp ile Sor"
                </a>
                <table class="variants-table">
                    <thead>
                        <tr>
                            <th>"Ebat"</th>
                            <th>"Koli Adedi"</th>
                        </tr>
                    </thead>
                    <tbody id="variantTbody" inner_html=variant_rows_html(&model.variants)></tbody>
                </table>
            </div>
        </section>
    }
}
