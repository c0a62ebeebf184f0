use contracts::catalog::ProductId;
use leptos::prelude::*;

use crate::catalog::state::SelectionContext;
use crate::shared::components::ui::checkbox::Checkbox;

/// Placeholder product card with its "Marcar" selection checkbox.
#[component]
pub fn ProductCard(
    /// Slot identifier; also used as the checkbox element id.
    id: ProductId,
    /// Classes from the grid placement policy.
    class: &'static str,
) -> impl IntoView {
    let selection = leptos::context::use_context::<SelectionContext>()
        .expect("SelectionContext context not found");

    let element_id = id.to_string();
    let checked = {
        let id = id.clone();
        Signal::derive(move || selection.is_selected(&id))
    };
    let on_change = Callback::new(move |_checked: bool| selection.toggle(id.clone()));

    view! {
        <div class=class>
            <div class="product-card__image-placeholder">
                <span class="product-card__image-hint">"Espacio para imagen del producto"</span>
            </div>
            <h3 class="product-card__name">"[Nombre del Producto]"</h3>
            <Checkbox label="Marcar" checked=checked on_change=on_change id=element_id />
        </div>
    }
}
