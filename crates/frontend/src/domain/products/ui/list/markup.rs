//! Kategori kartlarının saf markup üreticisi.
//!
//! Durumdan bağımsız, belge gerektirmeden snapshot testine açık; depodan
//! gelen her metin kaçırılarak gömülür.

use contracts::domain::Category;

use crate::shared::escape::{escape_attr, escape_html};

/// "Tüm kategoriler" görünümünün kart HTML'i. Kart başına bir
/// `data-category-id`; tıklama, konteynerdeki tek delegeli dinleyicide
/// çözülür.
pub fn category_cards_html(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|category| {
            let image = category.image_url.as_deref().unwrap_or_default();
            format!(
                concat!(
                    r#"<div class="col-lg-4 col-md-6">"#,
                    r#"<div class="project-card category-card" data-category-id="{id}">"#,
                    r#"<div class="project-image">"#,
                    r#"<img src="{image}" alt="{alt}" class="img-fluid">"#,
                    r#"<div class="project-overlay"><div class="project-actions">"#,
                    r#"<span class="btn-project">Ürünleri Göster</span>"#,
                    r#"</div></div></div>"#,
                    r#"<div class="project-info"><h3>{name}</h3></div>"#,
                    r#"</div></div>"#
                ),
                id = category.id,
                image = escape_attr(image),
                alt = escape_attr(&category.name),
                name = escape_html(&category.name),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.into(),
            slug: None,
            image_url: Some(format!("img/{}.png", id)),
        }
    }

    #[test]
    fn each_card_carries_its_category_id() {
        let html = category_cards_html(&[category(1, "Borular"), category(2, "Ek Parçalar")]);
        assert!(html.contains(r#"data-category-id="1""#));
        assert!(html.contains(r#"data-category-id="2""#));
        assert!(html.contains(r#"src="img/1.png""#));
    }

    #[test]
    fn stored_text_is_escaped() {
        let html = category_cards_html(&[category(9, "<script>alert(1)</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn empty_list_produces_no_markup() {
        assert_eq!(category_cards_html(&[]), "");
    }
}
