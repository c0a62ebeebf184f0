use leptos::prelude::*;

use crate::catalog::state::SelectionContext;

/// Fixed pill in the lower-left corner showing how many slots are checked.
/// Hidden while the selection is empty.
#[component]
pub fn SelectionCounter() -> impl IntoView {
    let selection = leptos::context::use_context::<SelectionContext>()
        .expect("SelectionContext context not found");

    let text = move || {
        let count = selection.count();
        let plural = if count == 1 { "" } else { "s" };
        format!("{count} producto{plural} seleccionado{plural}")
    };

    view! {
        <Show when=move || (selection.count() > 0)>
            <div class="selection-counter">
                <span class="selection-counter__text">{text}</span>
            </div>
        </Show>
    }
}
