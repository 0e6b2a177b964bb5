//! Scroll To Top Component
//!
//! Floating button, visible once the page is scrolled.

use leptos::prelude::*;

use crate::models::SectionId;
use crate::store::{store_navigate, use_shell_store, ShellStateStoreFields};

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let store = use_shell_store();
    let visibility = move || {
        if store.nav().get().is_scrolled() {
            "opacity-100"
        } else {
            "opacity-0 pointer-events-none"
        }
    };

    view! {
        <button
            class=move || format!(
                "fixed bottom-8 right-8 p-3 rounded-full bg-blue-600 text-white shadow-lg z-50 transition-opacity duration-300 hover:scale-110 {}",
                visibility()
            )
            title="Back to top"
            on:click=move |_| store_navigate(&store, SectionId::Home)
        >
            "\u{2191}"
        </button>
    }
}
