use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// Kategori seçim olayının payload'ı.
///
/// Hem abonenin doğrudan callback'ine hem de liste konteynerindeki
/// `category:selected` broadcast olayına gider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySelection {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<&Category> for CategorySelection {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            slug: category.slug.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slug_becomes_empty_string() {
        let cat = Category {
            id: 7,
            name: "Ek Parçalar".into(),
            slug: None,
            image_url: None,
        };
        let sel = CategorySelection::from(&cat);
        assert_eq!(sel.id, 7);
        assert_eq!(sel.slug, "");
    }
}
