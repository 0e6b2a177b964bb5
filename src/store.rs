//! Shell State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the two
//! pieces of state owned by the top-level shell: the theme and the
//! navigation state. Panels only ever see values derived from it.

use leptos::prelude::*;
use reactive_stores::Store;
use web_scrollspy::{ScrollSpy, SectionBox};

use crate::models::SectionId;
use crate::theme::{BrowserThemeBackend, ThemeStore};

/// Shell-level state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct ShellState {
    /// Theme preference and its persistence
    pub theme: ThemeStore<BrowserThemeBackend>,
    /// Active section, scrolled flag and navigation pin
    pub nav: ScrollSpy<SectionId>,
}

impl ShellState {
    pub fn new(theme: ThemeStore<BrowserThemeBackend>) -> Self {
        Self {
            theme,
            nav: ScrollSpy::new(SectionId::Home),
        }
    }
}

/// Type alias for the store
pub type ShellStore = Store<ShellState>;

/// Get the shell store from context
pub fn use_shell_store() -> ShellStore {
    expect_context::<ShellStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Flip the theme; marker and storage are updated before this returns
pub fn store_toggle_theme(store: &ShellStore) {
    store.theme().write().toggle();
}

/// Feed a scroll observation into the navigation state
pub fn store_observe_scroll(
    store: &ShellStore,
    scroll_y: f64,
    sections: Vec<(SectionId, Option<SectionBox>)>,
    now_ms: f64,
) {
    let current = store.nav().get_untracked();
    let mut next = current;
    next.observe(scroll_y, sections, now_ms);
    if next == current {
        return;
    }
    if next.active() != current.active() {
        log::debug!("[nav] active section {} -> {}", current.active().as_str(), next.active().as_str());
    }
    *store.nav().write() = next;
}

/// Navigate to a section: smooth scroll plus optimistic, pinned activation
pub fn store_navigate(store: &ShellStore, section: SectionId) {
    if !web_scrollspy::scroll_to_section(section) {
        log::debug!("[nav] #{} not found, activating without scrolling", section.as_str());
    }
    store.nav().write().pin(section, web_scrollspy::now_ms());
}
