//! Light/dark theme preference.
//!
//! The persisted value lives under a single key in a [`PreferenceBackend`]
//! (browser `localStorage` when hydrated) and is mirrored onto the root
//! element's `data-theme` attribute through a [`ThemeRoot`]. After `init` or
//! `toggle` both always hold the same value.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Absent or unrecognized values fall back to [`Theme::Light`].
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Key/value persistence for user preferences.
pub trait PreferenceBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let backend = Self::default();
        backend.write(key, value);
        backend
    }
}

impl PreferenceBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// The element whose `data-theme` attribute stylesheets key off.
pub trait ThemeRoot {
    fn theme(&self) -> Option<String>;
    fn set_theme(&self, theme: Theme);
}

pub struct ThemeStore {
    backend: Rc<dyn PreferenceBackend>,
    key: String,
}

impl ThemeStore {
    pub fn new(backend: Rc<dyn PreferenceBackend>, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    #[must_use]
    pub fn get(&self) -> Theme {
        Theme::parse(self.raw().as_deref())
    }

    /// The stored value as written, recognized or not.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.backend.read(&self.key)
    }

    pub fn set(&self, theme: Theme) {
        self.backend.write(&self.key, theme.as_str());
    }
}

pub struct ThemeController {
    store: ThemeStore,
    root: Rc<dyn ThemeRoot>,
}

impl ThemeController {
    pub fn new(store: ThemeStore, root: Rc<dyn ThemeRoot>) -> Self {
        Self { store, root }
    }

    /// Apply the persisted preference to the root element.
    ///
    /// An unrecognized stored value is overwritten with the applied theme so
    /// the root and storage agree.
    pub fn init(&self) -> Theme {
        let raw = self.store.raw();
        let theme = Theme::parse(raw.as_deref());
        self.root.set_theme(theme);
        if raw.as_deref() != Some(theme.as_str()) {
            self.store.set(theme);
        }
        theme
    }

    /// Flip the root attribute and persist the result.
    pub fn toggle(&self) -> Theme {
        let next = Theme::parse(self.root.theme().as_deref()).toggled();
        self.root.set_theme(next);
        self.store.set(next);
        log::info!("theme changed: {}", next.as_str());
        next
    }
}
