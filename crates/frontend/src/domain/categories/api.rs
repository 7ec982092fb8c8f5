use contracts::domain::Category;
use contracts::shared::StoreError;

use crate::system::store::StoreClient;

/// Tüm kategorileri id'ye göre artan sırada çeker.
/// Sıfır satır hata değildir; null kayıtlar savunmacı olarak ayıklanır.
pub async fn list_categories(client: &StoreClient) -> Result<Vec<Category>, StoreError> {
    let rows: Vec<Option<Category>> = client
        .select("categories", "select=id,name,slug,image_url&order=id.asc")
        .await?;
    Ok(rows.into_iter().flatten().collect())
}

/// Tek kategori: ürün detayındaki breadcrumb için.
pub async fn find_category(client: &StoreClient, id: i64) -> Result<Category, StoreError> {
    let mut rows: Vec<Category> = client
        .select(
            "categories",
            &format!("select=id,name,slug,image_url&id=eq.{}&limit=1", id),
        )
        .await?;
    rows.pop()
        .ok_or_else(|| StoreError::NotFound(format!("category id={}", id)))
}

#[cfg(test)]
mod tests {
    use contracts::domain::Category;

    #[test]
    fn null_rows_are_filtered_out() {
        // PostgREST satır dizisi; bozuk/null kayıt düşmeli
        let body = r#"[{"id":1,"name":"Borular","slug":"borular","image_url":null}, null]"#;
        let rows: Vec<Option<Category>> = serde_json::from_str(body).unwrap();
        let categories: Vec<Category> = rows.into_iter().flatten().collect();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Borular");
    }
}
