use serde::{Deserialize, Serialize};

/// Ürün. `products` tablosundaki bir satır; tam olarak bir kategoriye aittir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
}
