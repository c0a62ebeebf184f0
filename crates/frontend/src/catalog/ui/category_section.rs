use contracts::catalog::Category;
use leptos::prelude::*;

use crate::catalog::ui::product_grid::ProductGrid;

/// Category banner (background image + overlaid name) followed by the
/// section's product grid. A missing image degrades to a broken picture
/// behind the title; never an error.
#[component]
pub fn CategorySection(category: Category) -> impl IntoView {
    let image_src = format!("/images/{}", category.image_file());

    view! {
        <section class="category">
            <div class="category__banner">
                <div class="category__banner-overlay"></div>
                <h2 class="category__title">{category.name}</h2>
                <img class="category__banner-image" src=image_src alt=category.name />
            </div>
            <ProductGrid category=category />
        </section>
    }
}
