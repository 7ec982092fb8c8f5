//! Uzak veri deposu istemcisi (Supabase PostgREST okumaları).
//!
//! Kimlik bilgileri gömülü sayfadan `mount` sırasında gelir; bu çekirdek
//! anahtar yaşam döngüsü yönetmez, yalnızca okur.

use contracts::shared::StoreError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Depo erişim yapılandırması. `new` senkron doğrular: eksik URL veya
/// anahtar `StoreError::Config` olarak çağırana döner, asla yutulmaz.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    url: String,
    anon_key: String,
}

impl StoreConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, StoreError> {
        if url.trim().is_empty() || anon_key.trim().is_empty() {
            return Err(StoreError::Config("Supabase URL/KEY eksik".into()));
        }
        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// Depo içi görsel yolunu herkese açık storage URL'sine çevirir.
    /// Zaten mutlak (`http`/`https`) olan değerler aynen döner.
    pub fn public_image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/storage/v1/object/public/{}",
            self.url,
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone)]
pub struct StoreClient {
    config: StoreConfig,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn public_image_url(&self, path: &str) -> String {
        self.config.public_image_url(path)
    }

    /// `GET {url}/rest/v1/{table}?{query}` — satırları JSON olarak okur.
    /// Taşıma hatası ve 2xx dışı yanıtlar `StoreError::Fetch`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &str,
    ) -> Result<Vec<T>, StoreError> {
        let url = format!("{}/rest/v1/{}?{}", self.config.url, table, query);
        let response = Request::get(&url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.config.anon_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| StoreError::Fetch(e.to_string()))?;

        if !response.ok() {
            return Err(StoreError::Fetch(format!("HTTP {}", response.status())));
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| StoreError::Fetch(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_are_a_config_error() {
        assert!(matches!(
            StoreConfig::new("", "anon"),
            Err(StoreError::Config(_))
        ));
        assert!(matches!(
            StoreConfig::new("https://x.supabase.co", "  "),
            Err(StoreError::Config(_))
        ));
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let config = StoreConfig::new("https://x.supabase.co/", "anon").unwrap();
        assert_eq!(config.url, "https://x.supabase.co");
    }

    #[test]
    fn relative_image_path_becomes_public_storage_url() {
        let config = StoreConfig::new("https://x.supabase.co", "anon").unwrap();
        assert_eq!(
            config.public_image_url("urunler/boru.png"),
            "https://x.supabase.co/storage/v1/object/public/urunler/boru.png"
        );
        assert_eq!(
            config.public_image_url("/urunler/boru.png"),
            "https://x.supabase.co/storage/v1/object/public/urunler/boru.png"
        );
    }

    #[test]
    fn absolute_image_url_is_left_untouched() {
        let config = StoreConfig::new("https://x.supabase.co", "anon").unwrap();
        assert_eq!(
            config.public_image_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
