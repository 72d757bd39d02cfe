//! In-memory host collaborators.
//!
//! Each type is a cheap `Clone` handle over shared state, so a test can hand
//! one clone to the controller and keep another to inspect what it did.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::error::ThemeError;
use crate::host::{ActivateHandler, ColorSchemeQuery, Page, PreferenceStore, ThemingTarget};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

/// Key-value store with an optional simulated write failure.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    /// Make subsequent writes fail, as a full or disabled `localStorage` would.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.reject_writes.get() {
            return Err(ThemeError::StorageWrite("quota exceeded".to_owned()));
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Class-list stand-in for the document body.
#[derive(Clone, Default)]
pub struct MemoryTarget {
    flags: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target that already carries `flag`, like server-rendered markup might.
    pub fn with_flag(flag: &str) -> Self {
        let target = Self::new();
        target.add_flag(flag);
        target
    }
}

impl ThemingTarget for MemoryTarget {
    fn add_flag(&self, flag: &str) {
        self.flags.borrow_mut().insert(flag.to_owned());
    }

    fn remove_flag(&self, flag: &str) {
        self.flags.borrow_mut().remove(flag);
    }

    fn has_flag(&self, flag: &str) -> bool {
        self.flags.borrow().contains(flag)
    }
}

/// Page with a fixed set of element ids, their text, and click handlers.
#[derive(Clone, Default)]
pub struct MemoryPage {
    texts: Rc<RefCell<HashMap<String, String>>>,
    handlers: Rc<RefCell<HashMap<String, ActivateHandler>>>,
}

impl MemoryPage {
    /// Page with no elements at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Page containing the given element ids, each with empty text.
    pub fn with_elements(ids: &[&str]) -> Self {
        let page = Self::empty();
        page.texts
            .borrow_mut()
            .extend(ids.iter().map(|id| ((*id).to_owned(), String::new())));
        page
    }

    /// Current text of element `id`, or `None` if the page lacks it.
    pub fn text(&self, id: &str) -> Option<String> {
        self.texts.borrow().get(id).cloned()
    }

    pub fn has_handler(&self, id: &str) -> bool {
        self.handlers.borrow().contains_key(id)
    }

    /// Simulate a click on `id`. Returns `false` when nothing is bound.
    pub fn activate(&self, id: &str) -> bool {
        // Taken out while running so the handler may touch the page freely.
        let Some(mut handler) = self.handlers.borrow_mut().remove(id) else {
            return false;
        };
        handler();
        self.handlers
            .borrow_mut()
            .entry(id.to_owned())
            .or_insert(handler);
        true
    }
}

impl Page for MemoryPage {
    fn set_text(&self, id: &str, text: &str) -> bool {
        match self.texts.borrow_mut().get_mut(id) {
            Some(slot) => {
                text.clone_into(slot);
                true
            }
            None => false,
        }
    }

    fn bind_activate(&self, id: &str, handler: ActivateHandler) -> bool {
        if !self.texts.borrow().contains_key(id) {
            return false;
        }
        self.handlers.borrow_mut().insert(id.to_owned(), handler);
        true
    }
}

/// System preference fixed at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedScheme(pub bool);

impl ColorSchemeQuery for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}
