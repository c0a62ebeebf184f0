//! The set of currently checked product slots.

use indexmap::IndexSet;

use crate::catalog::ProductId;

/// Insertion-ordered set of selected [`ProductId`]s.
///
/// Iteration follows the order in which ids were selected; deselecting leaves
/// the order of the remaining ids untouched, and reselecting a previously
/// removed id appends it at the end (it counts as a new click).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: IndexSet<ProductId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inverts membership of `id`. Returns `true` when the id is selected
    /// after the call. Accepts any id, including ones that reference no real
    /// product slot.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.shift_remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ProductId {
        ProductId::from(raw)
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(id("HARINA-1")));
        assert!(selection.contains(&id("HARINA-1")));
        assert!(!selection.toggle(id("HARINA-1")));
        assert!(!selection.contains(&id("HARINA-1")));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_iteration_follows_click_order() {
        let mut selection = SelectionSet::new();
        selection.toggle(id("PASTA-3"));
        selection.toggle(id("HARINA-1"));
        selection.toggle(id("ARROZ-2"));

        let order: Vec<&str> = selection.iter().map(|p| p.as_str()).collect();
        assert_eq!(order, vec!["PASTA-3", "HARINA-1", "ARROZ-2"]);
    }

    #[test]
    fn test_deselection_keeps_residual_order() {
        let mut selection = SelectionSet::new();
        selection.toggle(id("PASTA-3"));
        selection.toggle(id("HARINA-1"));
        selection.toggle(id("ARROZ-2"));
        selection.toggle(id("HARINA-1"));

        let order: Vec<&str> = selection.iter().map(|p| p.as_str()).collect();
        assert_eq!(order, vec!["PASTA-3", "ARROZ-2"]);
    }

    #[test]
    fn test_reselection_appends_at_the_end() {
        let mut selection = SelectionSet::new();
        selection.toggle(id("PASTA-3"));
        selection.toggle(id("HARINA-1"));
        selection.toggle(id("PASTA-3"));
        selection.toggle(id("PASTA-3"));

        let order: Vec<&str> = selection.iter().map(|p| p.as_str()).collect();
        assert_eq!(order, vec!["HARINA-1", "PASTA-3"]);
    }

    #[test]
    fn test_unknown_ids_are_accepted() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle(id("NO-SUCH-CATEGORY-99")));
        assert_eq!(selection.len(), 1);
    }
}
