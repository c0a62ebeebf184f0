use crate::catalog::state::SelectionContext;
use crate::catalog::ui::page::CatalogPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the selection store to the whole app via context.
    provide_context(SelectionContext::new());

    view! {
        <CatalogPage />
    }
}
