use leptos::prelude::*;

/// Storefront header with the merchant's banner image at the well-known
/// asset path. A missing file shows as a broken image, not an error.
#[component]
pub fn HeaderBanner() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header__content">
                <div class="header__banner">
                    <img class="header__image" src="/images/header.jpg" alt="Header" />
                </div>
            </div>
        </header>
    }
}
