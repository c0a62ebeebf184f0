//! Centering policy for grid rows that do not fill the 3-column layout.

/// Column override for a card in the desktop (3-column) product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnStart {
    /// Fresh row, left-aligned.
    First,
    /// Center column.
    Second,
}

/// Placement override for the card at zero-based `index` in a grid of
/// `count` slots. Only three slot counts are special-cased so their last
/// row reads centered instead of left-aligned; every other layout falls
/// through to natural grid flow.
pub fn column_start(count: usize, index: usize) -> Option<ColumnStart> {
    match (count, index) {
        (4, 3) => Some(ColumnStart::First),
        (5, 4) => Some(ColumnStart::Second),
        (1, 0) => Some(ColumnStart::Second),
        _ => None,
    }
}

/// CSS classes for a card, including its placement modifier if any. The
/// `--col-*` modifiers only take effect at the 3-column breakpoint.
pub fn card_class(count: usize, index: usize) -> &'static str {
    match column_start(count, index) {
        Some(ColumnStart::First) => "product-card product-card--col-1",
        Some(ColumnStart::Second) => "product-card product-card--col-2",
        None => "product-card",
    }
}
