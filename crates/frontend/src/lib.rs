pub mod app;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::system::store::{StoreClient, StoreConfig};

/// Tek giriş noktası: sayfa, Supabase erişim bilgileriyle çağırır.
///
/// Eksik URL/KEY senkron `ConfigError` olarak çağırana döner; ağ hataları
/// ise kontrolcü sınırında yakalanıp sayfa içi mesaja çevrilir.
#[wasm_bindgen]
pub fn mount(supabase_url: &str, supabase_key: &str) -> Result<(), wasm_bindgen::JsError> {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = StoreConfig::new(supabase_url, supabase_key)
        .map_err(|e| wasm_bindgen::JsError::new(&e.to_string()))?;
    let client = StoreClient::new(config);

    leptos::mount::mount_to_body(move || view! { <app::App client=client /> });
    Ok(())
}
