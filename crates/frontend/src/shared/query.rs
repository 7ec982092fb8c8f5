//! Navigasyon konumu: query parametresi okuma ve reload'suz yazma.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::window;

/// Saf ayrıştırma: `?a=1&b=2` biçimindeki arama dizgisinden bir anahtar okur.
/// Boş değerler "yok" sayılır.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(key).cloned().filter(|v| !v.is_empty())
}

/// Geçerli konumdan bir query parametresi okur.
pub fn location_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    query_param(&search, key)
}

pub fn location_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Konumu `?key=value` olarak yeniden yazar; sayfa yenilenmez, geri/ileri
/// gezinme ve yer imleri çalışmaya devam eder.
pub fn push_query(key: &str, value: &str) {
    let Some(w) = window() else { return };
    let Ok(history) = w.history() else { return };
    let url = format!("?{}={}", key, urlencoding::encode(value));
    if history
        .push_state_with_url(&JsValue::NULL, "", Some(&url))
        .is_err()
    {
        log::warn!("history.pushState başarısız: {}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_named_parameter() {
        assert_eq!(
            query_param("?category=borular", "category"),
            Some("borular".to_string())
        );
        assert_eq!(
            query_param("category=borular&page=2", "page"),
            Some("2".to_string())
        );
    }

    #[test]
    fn missing_or_empty_parameter_is_none() {
        assert_eq!(query_param("", "category"), None);
        assert_eq!(query_param("?category=", "category"), None);
        assert_eq!(query_param("?slug=x", "category"), None);
    }
}
