pub mod markup;
pub mod state;

use contracts::domain::Product;
use contracts::shared::CategorySelection;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::domain::categories::api as categories_api;
use crate::domain::categories::controller::{CategoryController, CategoryOptions};
use crate::domain::categories::ui::chips::CategoryChips;
use crate::domain::products::api as products_api;
use crate::shared::{query, scroll};
use crate::system::store::StoreClient;
use self::markup::category_cards_html;
use self::state::{GridMode, ProductsViewState, RequestToken};

const PRODUCTS_SECTION_ID: &str = "projects";

/// Ürünler sayfası orkestratörü.
///
/// Kategori seçimini sayfalı ürün ızgarasına bağlar; ikincil görünüm olarak
/// tüm kategorileri kart halinde sunar. Kontrolcüye yalnızca `select` ve
/// callback kaydı üzerinden dokunur.
#[component]
#[allow(non_snake_case)]
pub fn ProductsPage() -> impl IntoView {
    let client = use_context::<StoreClient>().expect("StoreClient not found in context");
    let state = RwSignal::new(ProductsViewState::default());

    // Hızlı ardışık seçimlerde geç gelen yanıtın güncel seçimi ezmemesi
    // için her fetch bir jetonla etiketlenir; eskimiş yanıt atılır.
    let request_seq = StoredValue::new(RequestToken::default());

    let fetch_products = {
        let client = client.clone();
        move |category_id: i64| {
            let client = client.clone();
            let Some(token) = request_seq.try_update_value(|t| t.issue()) else {
                return;
            };
            spawn_local(async move {
                match products_api::list_by_category(&client, category_id).await {
                    Ok(products) => {
                        if !request_seq.get_value().is_current(token) {
                            return; // eskimiş yanıt
                        }
                        state.update(|s| s.set_products(products));
                        scroll::scroll_to_section(PRODUCTS_SECTION_ID);
                    }
                    Err(e) => {
                        log::error!("ürünler çekilemedi: {}", e);
                        if !request_seq.get_value().is_current(token) {
                            return;
                        }
                        state.update(|s| s.set_error("Ürünler yüklenemedi."));
                    }
                }
            });
        }
    };

    // Seçim işleyicisi: konumu güncelle, ürünleri çek, sayfa 1'den çiz.
    let on_select = {
        let fetch_products = fetch_products.clone();
        Callback::new(move |selection: CategorySelection| {
            query::push_query("category", &selection.slug);
            fetch_products(selection.id);
        })
    };

    let controller = CategoryController::new(
        client.clone(),
        CategoryOptions {
            auto_select_first: false,
            on_select: Some(on_select),
            ..Default::default()
        },
    );

    let show_all_categories = {
        let client = client.clone();
        let controller = controller.clone();
        move || {
            let client = client.clone();
            let controller = controller.clone();
            spawn_local(async move {
                match categories_api::list_categories(&client).await {
                    Ok(categories) => {
                        // Kart görünümünde hiçbir chip aktif kalmaz
                        controller.clear_selection();
                        state.update(|s| s.show_categories(categories));
                    }
                    Err(e) => {
                        log::error!("kategori kartları yüklenemedi: {}", e);
                        state.update(|s| s.set_error("Kategoriler yüklenemedi."));
                    }
                }
            });
        }
    };

    // Açılış: chip'leri yükle, sonra deep-link varsa o kategoriyi
    // programatik seç; yoksa tüm kategorileri göster.
    {
        let controller = controller.clone();
        let show_all_categories = show_all_categories.clone();
        spawn_local(async move {
            controller.load().await;
            let deep_link = query::location_param("category")
                .and_then(|slug| controller.find_by_slug(&slug));
            match deep_link {
                Some(id) => controller.select(id),
                None => show_all_categories(),
            }
        });
    }

    // Kartlar hazır markup olarak basıldığı için tıklama konteynerdeki tek
    // delegeli dinleyicide çözülür; kart dışı tıklamalar yok sayılır.
    let card_click = {
        let controller = controller.clone();
        move |ev: web_sys::MouseEvent| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            let Ok(Some(card)) = target.closest(".category-card") else {
                return;
            };
            let Some(id) = card
                .get_attribute("data-category-id")
                .and_then(|v| v.parse::<i64>().ok())
            else {
                return;
            };
            controller.select(id);
        }
    };

    let heading_click = show_all_categories.clone();
    let chips_controller = controller.clone();

    view! {
        <section id=PRODUCTS_SECTION_ID class="projects section">
            <div class="container">
                <h2 class="section-title" id="kategoriBaslik" on:click=move |_| heading_click()>
                    "Kategoriler"
                </h2>

                <div id="categoryList" class="category-filter">
                    <CategoryChips controller=chips_controller />
                </div>

                <div id="productGrid" class="row">
                    {
                        let card_click = card_click.clone();
                        move || {
                            if let Some(message) = state.with(|s| s.error.clone()) {
                                return view! { <p class="text-danger">{message}</p> }.into_any();
                            }
                            match state.with(|s| s.mode.clone()) {
                                GridMode::Idle => ().into_any(),
                                GridMode::Categories(categories) => {
                                    let card_click = card_click.clone();
                                    view! {
                                        <div
                                            class="category-cards row"
                                            on:click=card_click
                                            inner_html=category_cards_html(&categories)
                                        ></div>
                                    }
                                    .into_any()
                                }
                                GridMode::Products => {
                                    let items = state.with(|s| s.page_items().to_vec());
                                    if items.is_empty() {
                                        view! {
                                            <p class="text-muted">"Bu kategoride ürün bulunamadı."</p>
                                        }
                                        .into_any()
                                    } else {
                                        items
                                            .into_iter()
                                            .map(product_card)
                                            .collect_view()
                                            .into_any()
                                    }
                                }
                            }
                        }
                    }
                </div>

                <Show when=move || state.with(|s| s.pagination_visible())>
                    <div id="pagination" class="pagination">
                        {move || {
                            let total = state.with(|s| s.total_pages());
                            (1..=total)
                                .map(|page| {
                                    view! {
                                        <button
                                            class="page-btn"
                                            class:active=move || state.with(|s| s.pager.page) == page
                                            on:click=move |_| {
                                                if state.try_update(|s| s.select_page(page)).unwrap_or(false) {
                                                    scroll::scroll_to_section(PRODUCTS_SECTION_ID);
                                                }
                                            }
                                        >
                                            {page.to_string()}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>
        </section>
    }
}

fn product_card(product: Product) -> impl IntoView {
    let image = product.image_url.clone().unwrap_or_default();
    let detail_href = format!("urun-detay.html?slug={}", urlencoding::encode(&product.slug));

    view! {
        <div class="col-lg-4 col-md-6">
            <div class="project-card">
                <div class="project-image">
                    <img src=image alt=product.name.clone() class="img-fluid" />
                    <div class="project-overlay">
                        <div class="project-actions">
                            <a href=detail_href class="btn-project">"Detay"</a>
                        </div>
                    </div>
                </div>
                <div class="project-info">
                    <h3>{product.name}</h3>
                </div>
            </div>
        </div>
    }
}
