use serde::{Deserialize, Serialize};

/// Ürün varyantı (ebat / koli adedi).
/// `products_variants` tablosundaki bir satır; varyant olmaması geçerli
/// bir durumdur ve yer tutucuyla gösterilir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub package_qty: Option<i64>,
}
