use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// ProductId
// ============================================================================

/// Identifier of a selectable product slot: `"<CATEGORY NAME>-<1-based index>"`.
///
/// A synthetic label, not an inventory key — any string is accepted and
/// nothing checks that the slot actually exists in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Separates the category prefix from the slot index.
    ///
    /// [`label`](Self::label) splits on the first occurrence, so category
    /// names used as prefixes must never contain this character.
    pub const DELIMITER: char = '-';

    pub fn new(category: &str, index: usize) -> Self {
        debug_assert!(
            !category.contains(Self::DELIMITER),
            "category name '{category}' contains the id delimiter"
        );
        Self(format!("{}{}{}", category, Self::DELIMITER, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form used in the WhatsApp message: `"HARINA-1"` becomes
    /// `"HARINA 1"`. An id without a delimiter is shown as-is.
    pub fn label(&self) -> String {
        match self.0.split_once(Self::DELIMITER) {
            Some((category, index)) => format!("{} {}", category, index),
            None => self.0.clone(),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let id = ProductId::new("HARINA", 1);
        assert_eq!(id.as_str(), "HARINA-1");
        assert_eq!(id.to_string(), "HARINA-1");
    }

    #[test]
    fn test_label_splits_on_first_delimiter() {
        assert_eq!(ProductId::new("HARINA", 1).label(), "HARINA 1");
        // Prefixes with spaces stay intact; only the delimiter splits.
        assert_eq!(
            ProductId::new("AZÚCAR Y PAPELÓN", 3).label(),
            "AZÚCAR Y PAPELÓN 3"
        );
    }

    #[test]
    fn test_label_of_unparseable_id_is_the_id() {
        let id = ProductId::from("no delimiter here");
        assert_eq!(id.label(), "no delimiter here");
    }
}
