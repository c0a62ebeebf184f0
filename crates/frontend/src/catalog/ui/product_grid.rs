use contracts::catalog::Category;
use leptos::prelude::*;

use crate::catalog::grid::card_class;
use crate::catalog::ui::product_card::ProductCard;

/// Grid of placeholder cards for one category. 2 columns on phones, 3 from
/// the `md` breakpoint; placement modifiers come from the grid policy.
#[component]
pub fn ProductGrid(category: Category) -> impl IntoView {
    view! {
        <div class="product-grid">
            {category
                .product_ids()
                .enumerate()
                .map(|(index, id)| {
                    view! { <ProductCard id=id class=card_class(category.count, index) /> }
                })
                .collect_view()}
        </div>
    }
}
