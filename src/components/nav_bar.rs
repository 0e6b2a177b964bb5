//! Navigation Bar Component
//!
//! Fixed header with section links, active-section highlighting and the
//! theme toggle. Turns opaque once the page is scrolled.

use leptos::prelude::*;

use crate::data::OWNER_NAME;
use crate::models::SectionId;
use crate::store::{store_navigate, store_toggle_theme, use_shell_store, ShellStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_shell_store();

    let nav_class = move || {
        if store.nav().get().is_scrolled() {
            "fixed w-full z-50 transition-all duration-300 bg-white/90 dark:bg-gray-900/90 backdrop-blur-md shadow-md"
        } else {
            "fixed w-full z-50 transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <button
                    class="text-xl font-bold text-blue-600 hover:scale-105 transition-transform"
                    on:click=move |_| store_navigate(&store, SectionId::Home)
                >
                    {OWNER_NAME}
                </button>

                <div class="hidden md:flex space-x-6">
                    {SectionId::ALL.iter().map(|&section| {
                        let is_active = move || store.nav().get().active() == section;
                        view! {
                            <button
                                class=move || if is_active() { "text-blue-600 font-semibold" } else { "hover:text-blue-500" }
                                on:click=move |_| store_navigate(&store, section)
                            >
                                {section.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <ThemeToggle />
            </div>
        </nav>
    }
}

/// Sun/moon button flipping the theme
#[component]
fn ThemeToggle() -> impl IntoView {
    let store = use_shell_store();
    let is_dark = move || store.theme().with(|theme| theme.is_dark());

    view! {
        <button
            class="p-2 rounded-full bg-gray-200 dark:bg-gray-700 hover:scale-110 transition-transform"
            title=move || if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| store_toggle_theme(&store)
        >
            {move || if is_dark() {
                view! { <span class="text-yellow-400">"\u{2600}"</span> }.into_any()
            } else {
                view! { <span class="text-blue-900">"\u{263E}"</span> }.into_any()
            }}
        </button>
    }
}
