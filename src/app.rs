//! Portfolio App
//!
//! Top-level shell: navigation bar, the six anchored sections and the
//! scroll-to-top button.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AboutSection, ContactSection, ExperienceSection, HomeSection, NavBar, ProjectsSection,
    ScrollTopButton, SkillsSection,
};
use crate::config::RelayConfig;
use crate::context::RelayContext;
use crate::models::SectionId;
use crate::store::{store_observe_scroll, ShellState};
use crate::theme::{BrowserThemeBackend, ThemeStore};

#[component]
pub fn App() -> impl IntoView {
    // Theme is read from storage exactly once, here
    let store = Store::new(ShellState::new(ThemeStore::load(BrowserThemeBackend)));

    // Provide context to all children
    provide_context(store);
    provide_context(RelayContext::new(RelayConfig::from_build_env()));

    // Start tracking once the sections are in the document
    Effect::new(move |_| {
        web_scrollspy::bind_window_scroll(&SectionId::ALL, move |scroll_y, sections| {
            store_observe_scroll(&store, scroll_y, sections, web_scrollspy::now_ms());
        });
    });

    view! {
        <div class="font-sans bg-gray-50 dark:bg-gray-900 min-h-screen text-gray-800 dark:text-gray-200 overflow-x-hidden">
            <NavBar />

            <div id=SectionId::Home.as_str()><HomeSection /></div>
            <div id=SectionId::About.as_str()><AboutSection /></div>
            <div id=SectionId::Experience.as_str()><ExperienceSection /></div>
            <div id=SectionId::Projects.as_str()><ProjectsSection /></div>
            <div id=SectionId::Skills.as_str()><SkillsSection /></div>
            <div id=SectionId::Contact.as_str()><ContactSection /></div>

            <ScrollTopButton />
        </div>
    }
}
