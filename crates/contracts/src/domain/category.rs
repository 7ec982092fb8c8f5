use serde::{Deserialize, Serialize};

/// Ürün kategorisi. Deponun `categories` tablosundaki bir satır.
///
/// Eski kayıtlarda `slug` ve `image_url` bulunmayabilir; iki alan da
/// opsiyoneldir ve deserializasyonda varsayılan olarak boştur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Category {
    /// Kategorinin URL anahtarı: varsa slug, yoksa sayısal id.
    pub fn link_key(&self) -> String {
        match &self.slug {
            Some(slug) if !slug.is_empty() => slug.clone(),
            _ => self.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_row_with_null_slug() {
        let row = r#"{"id": 3, "name": "Borular", "slug": null, "image_url": null}"#;
        let cat: Category = serde_json::from_str(row).unwrap();
        assert_eq!(cat.id, 3);
        assert_eq!(cat.slug, None);
        assert_eq!(cat.link_key(), "3");
    }

    #[test]
    fn link_key_prefers_slug() {
        let cat = Category {
            id: 1,
            name: "Borular".into(),
            slug: Some("borular".into()),
            image_url: None,
        };
        assert_eq!(cat.link_key(), "borular");
    }
}
