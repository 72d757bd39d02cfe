//! Host collaborators the controller drives.
//!
//! DESIGN
//! ======
//! The controller never touches `web_sys` directly. Each browser primitive it
//! needs sits behind one small trait so the same controller runs against the
//! real page (`web` module, `hydrate` feature) or the in-memory hosts used by
//! tests. All methods take `&self`; implementations are single-threaded and
//! use interior mutability where they need it.

use crate::error::ThemeError;

/// Callback invoked when a page element is activated (clicked).
pub type ActivateHandler = Box<dyn FnMut()>;

/// Persistent string key-value storage (`localStorage`).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`ThemeError::StorageWrite`] when the store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The document root styling scope that CSS keys the dark theme off.
pub trait ThemingTarget {
    fn add_flag(&self, flag: &str);
    fn remove_flag(&self, flag: &str);
    fn has_flag(&self, flag: &str) -> bool;
}

/// Lookup-by-id access to page elements. Absent elements are not errors.
pub trait Page {
    /// Replace the text of element `id`. Returns `false` if it does not exist.
    fn set_text(&self, id: &str, text: &str) -> bool;

    /// Make activating element `id` run `handler`, replacing any previous
    /// handler. Returns `false` if it does not exist.
    fn bind_activate(&self, id: &str, handler: ActivateHandler) -> bool;
}

/// One-shot system color-scheme query.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> bool;
}
