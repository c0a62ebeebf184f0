use contracts::catalog::ProductId;
use contracts::selection::SelectionSet;
use contracts::whatsapp;
use leptos::prelude::*;

/// Selection store provided to the whole app via context.
///
/// Wraps the pure [`SelectionSet`] in a signal so checkbox state, the counter
/// and the WhatsApp caption all re-render when a slot is toggled. `toggle` is
/// the single mutation entry point.
#[derive(Clone, Copy)]
pub struct SelectionContext {
    selected: RwSignal<SelectionSet>,
}

impl SelectionContext {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(SelectionSet::new()),
        }
    }

    pub fn toggle(&self, id: ProductId) {
        self.selected.update(|selection| {
            let now_selected = selection.toggle(id.clone());
            leptos::logging::log!(
                "toggle '{}' -> selected={}, total={}",
                id,
                now_selected,
                selection.len()
            );
        });
    }

    /// Reactive membership read; call from a closure to track updates.
    pub fn is_selected(&self, id: &ProductId) -> bool {
        self.selected.with(|selection| selection.contains(id))
    }

    /// Reactive count of selected slots.
    pub fn count(&self) -> usize {
        self.selected.with(|selection| selection.len())
    }

    /// Caption for the current selection. Untracked: only read from click
    /// handlers, never from the render path.
    pub fn compose_message(&self) -> String {
        self.selected.with_untracked(whatsapp::compose_message)
    }
}
