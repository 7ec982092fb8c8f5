//! Seçim durumunun saf çekirdeği: DOM'suz, tek başına test edilebilir.

use contracts::domain::Category;
use contracts::shared::CategorySelection;

/// Yüklü kategori listesi + en fazla bir aktif seçim.
///
/// `select` bir olay akışıdır: bilinen bir id her çağrıda yeniden yayınlanır,
/// aynı id zaten aktif olsa bile bastırılmaz.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    categories: Vec<Category>,
    active: Option<i64>,
}

impl SelectionModel {
    /// Listeyi değiştirir ve seçimi sıfırlar.
    pub fn reset(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.active = None;
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active(&self) -> Option<i64> {
        self.active
    }

    /// Aktif işareti kaldırır; yüklü liste yerinde kalır.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// Artan id sırasındaki ilk kategori (otomatik seçim için).
    pub fn first_id(&self) -> Option<i64> {
        self.categories.first().map(|c| c.id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<i64> {
        self.categories
            .iter()
            .find(|c| c.slug.as_deref() == Some(slug))
            .map(|c| c.id)
    }

    /// Bilinmeyen id: hiçbir şey değişmez, `None` döner.
    /// Bilinen id: aktif işaret o kategoriye taşınır ve payload her seferinde
    /// yeniden üretilir.
    pub fn select(&mut self, id: i64) -> Option<CategorySelection> {
        let category = self.categories.iter().find(|c| c.id == id)?;
        let payload = CategorySelection::from(category);
        self.active = Some(id);
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Category> {
        vec![
            Category {
                id: 1,
                name: "Pipes".into(),
                slug: Some("pipes".into()),
                image_url: None,
            },
            Category {
                id: 2,
                name: "Fittings".into(),
                slug: Some("fittings".into()),
                image_url: None,
            },
        ]
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut model = SelectionModel::default();
        model.reset(sample());
        assert!(model.select(99).is_none());
        assert_eq!(model.active(), None);
    }

    #[test]
    fn selecting_moves_the_active_marker() {
        let mut model = SelectionModel::default();
        model.reset(sample());
        let sel = model.select(2).unwrap();
        assert_eq!(sel.name, "Fittings");
        assert_eq!(sel.slug, "fittings");
        assert_eq!(model.active(), Some(2));
        model.select(1).unwrap();
        assert_eq!(model.active(), Some(1));
    }

    #[test]
    fn reselecting_the_same_id_emits_again() {
        let mut model = SelectionModel::default();
        model.reset(sample());
        assert!(model.select(1).is_some());
        assert!(model.select(1).is_some());
        assert_eq!(model.active(), Some(1));
    }

    #[test]
    fn first_id_follows_load_order() {
        let mut model = SelectionModel::default();
        model.reset(sample());
        assert_eq!(model.first_id(), Some(1));
        assert_eq!(model.select(model.first_id().unwrap()).unwrap().id, 1);
    }

    #[test]
    fn reset_clears_the_selection() {
        let mut model = SelectionModel::default();
        model.reset(sample());
        model.select(2);
        model.reset(sample());
        assert_eq!(model.active(), None);
    }

    #[test]
    fn clearing_removes_the_marker_but_keeps_the_list() {
        let mut model = SelectionModel::default();
        model.reset(sample());
        model.select(2);
        model.clear_active();
        assert_eq!(model.active(), None);
        assert_eq!(model.categories().len(), 2);
        assert!(model.select(2).is_some());
    }

    #[test]
    fn lookup_by_slug() {
        let mut model = SelectionModel::default();
        model.reset(sample());
        assert_eq!(model.find_by_slug("fittings"), Some(2));
        assert_eq!(model.find_by_slug("yok"), None);
    }
}
