//! Floating WhatsApp action button.
//!
//! Composes the caption from the current selection, percent-encodes it onto
//! the `wa.me` deep link and opens the chat in a new browsing context.
//! Fire-and-forget: a blocked popup is logged and otherwise ignored.

use leptos::prelude::*;

use crate::catalog::state::SelectionContext;
use crate::shared::icons::icon;
use contracts::whatsapp::chat_url;

/// Opens `url` in a new browsing context.
fn open_chat(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("the popup was blocked".to_string()),
        Err(_) => Err("the browser refused to open the link".to_string()),
    }
}

#[component]
pub fn WhatsAppButton() -> impl IntoView {
    let selection = leptos::context::use_context::<SelectionContext>()
        .expect("SelectionContext context not found");

    let on_click = move |_| {
        let message = selection.compose_message();
        let url = chat_url(&message);
        leptos::logging::log!("opening WhatsApp chat: {}", url);
        if let Err(reason) = open_chat(&url) {
            leptos::logging::warn!("WhatsApp link not opened: {}", reason);
        }
    };

    view! {
        <button class="whatsapp-fab" aria-label="Contactar por WhatsApp" on:click=on_click>
            {icon("message-circle")}
        </button>
    }
}
