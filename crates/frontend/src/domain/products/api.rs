use contracts::domain::{Product, ProductVariant};
use contracts::shared::StoreError;

use crate::system::store::StoreClient;

/// Detay sayfasının arama anahtarı: `?slug=` öncelikli, yoksa sayısal `?id=`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductKey {
    Id(i64),
    Slug(String),
}

impl ProductKey {
    /// Query parametrelerinden anahtar üretir. Boş slug ve sayı olmayan id
    /// geçersizdir; ikisi de yoksa `None`.
    pub fn from_params(id: Option<String>, slug: Option<String>) -> Option<Self> {
        if let Some(slug) = slug {
            let slug = slug.trim();
            if !slug.is_empty() {
                return Some(ProductKey::Slug(slug.to_string()));
            }
        }
        id.and_then(|raw| raw.trim().parse::<i64>().ok().map(ProductKey::Id))
    }
}

/// Seçili kategorinin ürünleri, id'ye göre artan sırada.
pub async fn list_by_category(
    client: &StoreClient,
    category_id: i64,
) -> Result<Vec<Product>, StoreError> {
    client
        .select(
            "products",
            &format!(
                "select=id,slug,name,image_url,category_id&category_id=eq.{}&order=id.asc",
                category_id
            ),
        )
        .await
}

/// Tam olarak bir ürün; eşleşme yoksa `NotFound`.
pub async fn find_one(client: &StoreClient, key: &ProductKey) -> Result<Product, StoreError> {
    let filter = match key {
        ProductKey::Id(id) => format!("id=eq.{}", id),
        ProductKey::Slug(slug) => format!("slug=eq.{}", urlencoding::encode(slug)),
    };
    let mut rows: Vec<Product> = client
        .select(
            "products",
            &format!("select=id,slug,name,image_url,category_id&{}&limit=1", filter),
        )
        .await?;
    rows.pop()
        .ok_or_else(|| StoreError::NotFound(format!("product {:?}", key)))
}

/// Ürünün varyant satırları. Çağıran taraf hatayı ölümcül saymaz:
/// loglanır ve sıfır varyant gibi davranılır.
pub async fn list_variants(
    client: &StoreClient,
    product_id: i64,
) -> Result<Vec<ProductVariant>, StoreError> {
    client
        .select(
            "products_variants",
            &format!("select=size,package_qty&product_id=eq.{}", product_id),
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_takes_precedence_over_id() {
        let key = ProductKey::from_params(Some("5".into()), Some("pvc-boru".into()));
        assert_eq!(key, Some(ProductKey::Slug("pvc-boru".into())));
    }

    #[test]
    fn numeric_id_is_accepted_when_slug_is_absent() {
        assert_eq!(
            ProductKey::from_params(Some("5".into()), None),
            Some(ProductKey::Id(5))
        );
        assert_eq!(
            ProductKey::from_params(Some(" 12 ".into()), Some("  ".into())),
            Some(ProductKey::Id(12))
        );
    }

    #[test]
    fn invalid_parameters_yield_none() {
        assert_eq!(ProductKey::from_params(None, None), None);
        assert_eq!(ProductKey::from_params(Some("abc".into()), None), None);
        assert_eq!(ProductKey::from_params(Some("".into()), Some("".into())), None);
    }
}
