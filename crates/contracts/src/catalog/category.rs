use serde::Serialize;

use crate::catalog::product::ProductId;
use crate::catalog::slug::image_file_name;

// ============================================================================
// Category
// ============================================================================

/// A catalog section: a display name plus a fixed number of product slots.
///
/// Categories are static configuration, not records — adding or removing one
/// is a change to [`CATEGORIES`], never to rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub count: usize,
}

impl Category {
    /// File name of this category's background image, e.g. `"harina.jpg"`.
    pub fn image_file(&self) -> String {
        image_file_name(self.name)
    }

    /// Identifiers of the product slots in this category, in display order.
    pub fn product_ids(&self) -> impl Iterator<Item = ProductId> + '_ {
        (1..=self.count).map(|index| ProductId::new(self.name, index))
    }
}

/// The storefront sections, in display order.
///
/// Names double as identifier prefixes, so they must not contain the
/// [`ProductId::DELIMITER`] character.
pub const CATEGORIES: [Category; 13] = [
    Category { name: "HARINA", count: 4 },
    Category { name: "ARROZ", count: 4 },
    Category { name: "PASTA", count: 5 },
    Category { name: "GRANOS", count: 3 },
    Category { name: "MARGARINA", count: 2 },
    Category { name: "ACEITE", count: 3 },
    Category { name: "AZÚCAR Y PAPELÓN", count: 4 },
    Category { name: "CAFÉ", count: 2 },
    Category { name: "CONDIMENTOS", count: 1 },
    Category { name: "SALSAS", count: 5 },
    Category { name: "ENLATADOS", count: 3 },
    Category { name: "PROTEÍNA", count: 2 },
    Category { name: "LIMPIEZA E HIGIENE", count: 6 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_delimiter_free() {
        for category in CATEGORIES {
            assert!(
                !category.name.contains(ProductId::DELIMITER),
                "category name '{}' would break identifier parsing",
                category.name
            );
        }
    }

    #[test]
    fn test_every_category_has_slots() {
        assert_eq!(CATEGORIES.len(), 13);
        for category in CATEGORIES {
            assert!(category.count > 0, "empty category '{}'", category.name);
        }
    }

    #[test]
    fn test_product_ids_are_one_based() {
        let harina = CATEGORIES[0];
        let ids: Vec<String> = harina
            .product_ids()
            .map(|id| id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["HARINA-1", "HARINA-2", "HARINA-3", "HARINA-4"]);
    }
}
