//! Theme Store
//!
//! Dark/light preference persisted in `localStorage` and mirrored as the
//! `dark` class on `<html>`. Storage and document access go through
//! [`ThemeBackend`] so the store can run outside a browser.

/// Storage key holding `"dark"` or `"light"`
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while dark mode is active
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    /// Interpret a stored value. Absent or empty means dark; anything but
    /// `"dark"` means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("dark") => ThemePreference::Dark,
            Some(_) => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }
}

/// Persistence and document marker for the theme
pub trait ThemeBackend {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
    fn set_marker(&self, dark: bool);
}

/// Single owner of the theme preference.
///
/// Read once by [`ThemeStore::load`], written only by [`ThemeStore::toggle`].
#[derive(Debug, Clone)]
pub struct ThemeStore<B> {
    backend: B,
    preference: ThemePreference,
}

impl<B: ThemeBackend> ThemeStore<B> {
    /// Read the stored preference and bring marker and storage in line with it
    pub fn load(backend: B) -> Self {
        let preference = ThemePreference::from_stored(backend.load().as_deref());
        let store = Self { backend, preference };
        store.apply();
        log::debug!("[theme] loaded {}", preference.as_str());
        store
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn is_dark(&self) -> bool {
        self.preference.is_dark()
    }

    /// Flip the preference, updating marker and storage before returning
    pub fn toggle(&mut self) -> ThemePreference {
        self.preference = self.preference.toggled();
        self.apply();
        log::debug!("[theme] switched to {}", self.preference.as_str());
        self.preference
    }

    fn apply(&self) {
        self.backend.set_marker(self.preference.is_dark());
        self.backend.save(self.preference.as_str());
    }
}

/// `localStorage` + `document.documentElement.classList`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserThemeBackend;

impl BrowserThemeBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl ThemeBackend for BrowserThemeBackend {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(STORAGE_KEY, value).is_err() {
                log::warn!("[theme] could not persist preference");
            }
        }
    }

    fn set_marker(&self, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = if dark { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// In-memory stand-in for storage and the document root
    #[derive(Clone, Default)]
    struct MemoryBackend {
        stored: Rc<RefCell<Option<String>>>,
        marker: Rc<Cell<bool>>,
        writes: Rc<Cell<u32>>,
    }

    impl MemoryBackend {
        fn with_stored(value: &str) -> Self {
            let backend = Self::default();
            *backend.stored.borrow_mut() = Some(value.to_string());
            backend
        }
    }

    impl ThemeBackend for MemoryBackend {
        fn load(&self) -> Option<String> {
            self.stored.borrow().clone()
        }

        fn save(&self, value: &str) {
            *self.stored.borrow_mut() = Some(value.to_string());
            self.writes.set(self.writes.get() + 1);
        }

        fn set_marker(&self, dark: bool) {
            self.marker.set(dark);
        }
    }

    #[test]
    fn test_absent_defaults_to_dark() {
        let backend = MemoryBackend::default();
        let store = ThemeStore::load(backend.clone());
        assert_eq!(store.preference(), ThemePreference::Dark);
        assert!(backend.marker.get());
        assert_eq!(backend.stored.borrow().as_deref(), Some("dark"));
    }

    #[test]
    fn test_stored_light_is_respected() {
        let backend = MemoryBackend::with_stored("light");
        let store = ThemeStore::load(backend.clone());
        assert!(!store.is_dark());
        assert!(!backend.marker.get());
    }

    #[test]
    fn test_unknown_value_reads_as_light() {
        assert_eq!(ThemePreference::from_stored(Some("sepia")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(Some("light")), ThemePreference::Light);
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Dark);
    }

    #[test]
    fn test_empty_stored_value_reads_as_dark() {
        assert_eq!(ThemePreference::from_stored(Some("")), ThemePreference::Dark);

        let backend = MemoryBackend::with_stored("");
        let store = ThemeStore::load(backend.clone());
        assert!(store.is_dark());
        assert!(backend.marker.get());
        assert_eq!(backend.stored.borrow().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_updates_marker_and_storage_immediately() {
        let backend = MemoryBackend::with_stored("dark");
        let mut store = ThemeStore::load(backend.clone());

        assert_eq!(store.toggle(), ThemePreference::Light);
        assert!(!backend.marker.get());
        assert_eq!(backend.stored.borrow().as_deref(), Some("light"));
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let backend = MemoryBackend::with_stored("light");
        let mut store = ThemeStore::load(backend.clone());
        let writes_after_load = backend.writes.get();

        store.toggle();
        store.toggle();

        assert_eq!(store.preference(), ThemePreference::Light);
        assert!(!backend.marker.get());
        assert_eq!(backend.stored.borrow().as_deref(), Some("light"));
        assert_eq!(backend.writes.get(), writes_after_load + 2);
    }
}
