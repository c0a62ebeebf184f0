pub mod category_section;
pub mod page;
pub mod product_card;
pub mod product_grid;
pub mod selection_counter;
