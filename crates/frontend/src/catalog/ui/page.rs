use contracts::catalog::CATEGORIES;
use leptos::prelude::*;

use crate::catalog::ui::category_section::CategorySection;
use crate::catalog::ui::selection_counter::SelectionCounter;
use crate::layout::header::HeaderBanner;
use crate::whatsapp::WhatsAppButton;

/// The whole catalog: header banner, one section per category, the floating
/// WhatsApp button and the selection counter.
#[component]
pub fn CatalogPage() -> impl IntoView {
    view! {
        <div class="catalog">
            <HeaderBanner />
            <main class="catalog__content">
                {CATEGORIES
                    .iter()
                    .map(|category| view! { <CategorySection category=*category /> })
                    .collect_view()}
            </main>
            <WhatsAppButton />
            <SelectionCounter />
        </div>
    }
}
