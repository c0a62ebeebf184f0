//! WhatsApp message composition and deep-link assembly.

use crate::selection::SelectionSet;

/// Destination phone number of the `wa.me` deep link.
pub const PHONE_NUMBER: &str = "584122923778";

/// Caption sent when nothing is selected yet.
pub const GREETING: &str = "Hola, estuve viendo su catálogo y me interesa saber el precio de...";

/// Builds the chat caption for the current selection.
///
/// Empty selection yields [`GREETING`]; otherwise the selected slots are
/// listed by label, in the order they were clicked.
pub fn compose_message(selection: &SelectionSet) -> String {
    if selection.is_empty() {
        return GREETING.to_string();
    }
    let products = selection
        .iter()
        .map(|id| id.label())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Hola, estuve viendo su catálogo y me interesa: {}", products)
}

/// Percent-encodes `message` onto the `wa.me` deep-link base.
pub fn chat_url(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        PHONE_NUMBER,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;

    #[test]
    fn test_empty_selection_uses_the_greeting() {
        assert_eq!(compose_message(&SelectionSet::new()), GREETING);
    }

    #[test]
    fn test_message_lists_labels_in_click_order() {
        let mut selection = SelectionSet::new();
        selection.toggle(ProductId::new("HARINA", 1));
        selection.toggle(ProductId::new("ARROZ", 2));

        assert_eq!(
            compose_message(&selection),
            "Hola, estuve viendo su catálogo y me interesa: HARINA 1, ARROZ 2"
        );
    }

    #[test]
    fn test_chat_url_for_empty_selection() {
        let url = chat_url(&compose_message(&SelectionSet::new()));
        assert_eq!(
            url,
            "https://wa.me/584122923778?text=Hola%2C%20estuve%20viendo%20su%20cat%C3%A1logo%20y%20me%20interesa%20saber%20el%20precio%20de..."
        );
    }

    #[test]
    fn test_chat_url_encodes_accented_labels() {
        let mut selection = SelectionSet::new();
        selection.toggle(ProductId::new("CAFÉ", 2));

        let url = chat_url(&compose_message(&selection));
        assert_eq!(
            url,
            "https://wa.me/584122923778?text=Hola%2C%20estuve%20viendo%20su%20cat%C3%A1logo%20y%20me%20interesa%3A%20CAF%C3%89%202"
        );
    }
}
