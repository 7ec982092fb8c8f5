//! Varyant tablosunun saf satır üreticisi.

use contracts::domain::ProductVariant;

use crate::shared::escape::escape_html;

/// Varyant satırlarının HTML'i. Boş liste geçerli bir durumdur ve
/// yer tutucu satırla çizilir; null hücreler `-` olur.
pub fn variant_rows_html(variants: &[ProductVariant]) -> String {
    if variants.is_empty() {
        return r#"<tr><td colspan="2" class="text-muted">Varyant bulunamadı.</td></tr>"#
            .to_string();
    }

    variants
        .iter()
        .map(|variant| {
            let size = variant.size.as_deref().unwrap_or("-");
            let package_qty = variant
                .package_qty
                .map(|q| q.to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "<tr><td>{}</td><td>{}</td></tr>",
                escape_html(size),
                escape_html(&package_qty)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_the_placeholder_row() {
        let html = variant_rows_html(&[]);
        assert!(html.contains("Varyant bulunamadı."));
        assert!(html.contains(r#"colspan="2""#));
    }

    #[test]
    fn null_cells_become_dashes() {
        let html = variant_rows_html(&[ProductVariant {
            size: None,
            package_qty: None,
        }]);
        assert_eq!(html, "<tr><td>-</td><td>-</td></tr>");
    }

    #[test]
    fn stored_text_is_escaped() {
        let html = variant_rows_html(&[ProductVariant {
            size: Some("<110mm>".into()),
            package_qty: Some(25),
        }]);
        assert_eq!(html, "<tr><td>&lt;110mm&gt;</td><td>25</td></tr>");
    }
}
