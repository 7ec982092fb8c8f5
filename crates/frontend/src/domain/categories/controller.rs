//! Kategori kontrolcüsü: yükle → çiz → seç döngüsünün sahibi.
//!
//! Orkestratör bu kontrolcüye yalnızca `select` ve callback kaydı
//! (kuruluşta `on_select`, sonrasında `on_selection`) üzerinden dokunur;
//! kontrolcü orkestratörü hiç çağırmaz (tek yönlü bağımlılık).

use std::sync::Arc;

use contracts::shared::CategorySelection;
use leptos::prelude::*;
use web_sys::{CustomEvent, CustomEventInit};

use crate::domain::categories::api;
use crate::domain::categories::selection::SelectionModel;
use crate::system::store::StoreClient;

/// Yükleme durumu: Loading → Ready | Empty | Failed.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryPhase {
    Loading,
    Ready,
    Empty,
    Failed(String),
}

/// Seçim yayın hedefi. Doğrudan callback'ten bağımsız ikinci kanal;
/// testler DOM'suz bir kayıt alıcısı takabilir.
pub trait SelectionSink {
    fn publish(&self, selection: &CategorySelection);
}

/// Chip konteyneri üzerinde `category:selected` CustomEvent'i yayınlar.
/// Dışarıdaki dinleyiciler her seçimi buradan görür.
pub struct EventBroadcast {
    container_id: String,
}

impl SelectionSink for EventBroadcast {
    fn publish(&self, selection: &CategorySelection) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.container_id))
        else {
            return;
        };

        let detail = match serde_wasm_bindgen::to_value(selection) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("seçim payload'ı serileştirilemedi: {}", e);
                return;
            }
        };
        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_detail(&detail);

        match CustomEvent::new_with_event_init_dict("category:selected", &init) {
            Ok(event) => {
                if el.dispatch_event(&event).is_err() {
                    log::warn!("category:selected yayınlanamadı");
                }
            }
            Err(e) => log::warn!("CustomEvent kurulamadı: {:?}", e),
        }
    }
}

pub struct CategoryOptions {
    pub auto_select_first: bool,
    /// Chip konteynerinin element id'si; broadcast bu elemente gider.
    pub container_id: String,
    /// Kuruluşta kaydedilen doğrudan callback; `on_selection` ile değişir.
    pub on_select: Option<Callback<CategorySelection>>,
}

impl Default for CategoryOptions {
    fn default() -> Self {
        Self {
            auto_select_first: true,
            container_id: "categoryList".to_string(),
            on_select: None,
        }
    }
}

#[derive(Clone)]
pub struct CategoryController {
    client: StoreClient,
    pub phase: RwSignal<CategoryPhase>,
    pub model: RwSignal<SelectionModel>,
    auto_select_first: bool,
    direct: StoredValue<Option<Callback<CategorySelection>>>,
    broadcast: Arc<dyn SelectionSink + Send + Sync>,
}

impl CategoryController {
    pub fn new(client: StoreClient, options: CategoryOptions) -> Self {
        Self {
            client,
            phase: RwSignal::new(CategoryPhase::Loading),
            model: RwSignal::new(SelectionModel::default()),
            auto_select_first: options.auto_select_first,
            direct: StoredValue::new(options.on_select),
            broadcast: Arc::new(EventBroadcast {
                container_id: options.container_id,
            }),
        }
    }

    /// Kategorileri çeker ve durumu günceller. Depo hatası loglanır ve
    /// sayfa içi hata durumuna çevrilir; bu çağrı asla hata fırlatmaz.
    pub async fn load(&self) {
        self.phase.set(CategoryPhase::Loading);

        match api::list_categories(&self.client).await {
            Ok(categories) if categories.is_empty() => {
                self.phase.set(CategoryPhase::Empty);
            }
            Ok(categories) => {
                self.model.update(|m| m.reset(categories));
                self.phase.set(CategoryPhase::Ready);
                if self.auto_select_first {
                    if let Some(first) = self.model.with_untracked(|m| m.first_id()) {
                        self.select(first);
                    }
                }
            }
            Err(e) => {
                log::error!("kategori yükleme hatası: {}", e);
                self.phase
                    .set(CategoryPhase::Failed(
                        "Kategoriler yüklenirken bir hata oluştu.".to_string(),
                    ));
            }
        }
    }

    /// Programatik seçim. Bilinmeyen id sessizce yok sayılır; bilinen id
    /// aktif işareti taşır ve her çağrıda yeniden yayınlanır.
    pub fn select(&self, id: i64) {
        let Some(selection) = self.model.try_update(|m| m.select(id)).flatten() else {
            return;
        };
        self.publish(&selection);
    }

    /// Tek abonelik: yeni callback öncekinin yerine geçer.
    /// Broadcast kanalı bundan bağımsız olarak her zaman çalışır.
    pub fn on_selection(&self, callback: Callback<CategorySelection>) {
        self.direct.set_value(Some(callback));
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<i64> {
        self.model.with_untracked(|m| m.find_by_slug(slug))
    }

    /// Aktif işareti kaldırır; tüm kategoriler görünümüne dönüşte çağrılır.
    pub fn clear_selection(&self) {
        self.model.update(|m| m.clear_active());
    }

    fn publish(&self, selection: &CategorySelection) {
        // Önce doğrudan callback, ardından her koşulda broadcast.
        if let Some(callback) = self.direct.get_value() {
            callback.run(selection.clone());
        }
        self.broadcast.publish(selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_select_first_without_a_callback() {
        let options = CategoryOptions::default();
        assert!(options.auto_select_first);
        assert!(options.on_select.is_none());
        assert_eq!(options.container_id, "categoryList");
    }
}
