use leptos::prelude::*;

use crate::domain::categories::controller::{CategoryController, CategoryPhase};

/// Seçilebilir kategori chip'leri.
///
/// Her chip id/name/slug'ını `data-*` olarak taşır; dış kod seçimi doğrudan
/// markup'tan okuyabilir. Aktif işaret her an tam bir chip'te durur.
#[component]
#[allow(non_snake_case)]
pub fn CategoryChips(controller: CategoryController) -> impl IntoView {
    let phase = controller.phase;
    let model = controller.model;

    view! {
        {move || match phase.get() {
            CategoryPhase::Loading => view! {
                <div class="cat-skeleton">
                    <span class="sk-item"></span>
                    <span class="sk-item"></span>
                    <span class="sk-item"></span>
                </div>
            }
            .into_any(),
            CategoryPhase::Empty => view! {
                <div class="cat-error" role="alert">"Hiç kategori bulunamadı."</div>
            }
            .into_any(),
            CategoryPhase::Failed(message) => view! {
                <div class="cat-error" role="alert">{message}</div>
            }
            .into_any(),
            CategoryPhase::Ready => {
                let categories = model.with(|m| m.categories().to_vec());
                let controller = controller.clone();
                view! {
                    <div class="category-list" role="list">
                        {categories
                            .into_iter()
                            .map(|category| {
                                let id = category.id;
                                let name = category.name.clone();
                                let slug = category.slug.clone().unwrap_or_default();
                                let controller = controller.clone();
                                view! {
                                    <button
                                        class="category-chip"
                                        role="listitem"
                                        class:active=move || model.with(|m| m.active() == Some(id))
                                        aria-current=move || {
                                            if model.with(|m| m.active() == Some(id)) { "true" } else { "false" }
                                        }
                                        data-id=id.to_string()
                                        data-name=name.clone()
                                        data-slug=slug
                                        on:click=move |_| controller.select(id)
                                    >
                                        {name.clone()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
        }}
    }
}
