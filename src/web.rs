//! Browser bindings: `web-sys` host adapters and the wasm exports.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches the DOM. The host page loads the
//! wasm bundle and then calls `initDarkMode()` once; that builds one
//! controller over the real page, resolves the startup theme, binds the
//! toggle trigger, and publishes `window.toggleDarkMode` for inline handlers.
//!
//! TRADE-OFFS
//! ==========
//! Click and global closures are leaked with `Closure::forget`; they live as
//! long as the page. The system color scheme is sampled once at startup and
//! not watched afterwards.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DomTokenList, HtmlElement, Storage, Window};

use crate::config::ThemeConfig;
use crate::consts::PREFERS_DARK_QUERY;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::host::{ActivateHandler, ColorSchemeQuery, Page, PreferenceStore, ThemingTarget};
use crate::mount::{MountReport, SharedController, mount};

type PageController = SharedController<LocalStorage, BodyClassList, DocumentPage>;

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

// ── Adapters ────────────────────────────────────────────────────

/// `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// # Errors
    ///
    /// Returns [`ThemeError::StorageUnavailable`] when storage is disabled.
    pub fn from_window(window: &Window) -> Result<Self, ThemeError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(ThemeError::StorageUnavailable("localStorage is null".to_owned())),
            Err(err) => Err(ThemeError::StorageUnavailable(js_error_text(&err))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read failed: {}", js_error_text(&err));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| ThemeError::StorageWrite(js_error_text(&err)))
    }
}

/// Class list of `<body>`.
pub struct BodyClassList {
    classes: DomTokenList,
}

impl BodyClassList {
    pub fn new(body: &HtmlElement) -> Self {
        Self { classes: body.class_list() }
    }
}

impl ThemingTarget for BodyClassList {
    fn add_flag(&self, flag: &str) {
        if let Err(err) = self.classes.add_1(flag) {
            log::warn!("classList.add({flag}) failed: {}", js_error_text(&err));
        }
    }

    fn remove_flag(&self, flag: &str) {
        if let Err(err) = self.classes.remove_1(flag) {
            log::warn!("classList.remove({flag}) failed: {}", js_error_text(&err));
        }
    }

    fn has_flag(&self, flag: &str) -> bool {
        self.classes.contains(flag)
    }
}

/// Element lookup on the live document.
pub struct DocumentPage {
    document: Document,
}

impl DocumentPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Page for DocumentPage {
    fn set_text(&self, id: &str, text: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        element.set_text_content(Some(text));
        true
    }

    fn bind_activate(&self, id: &str, handler: ActivateHandler) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            log::warn!("#{id} is not an HTML element; toggle not bound");
            return false;
        };
        let closure = Closure::wrap(handler);
        element.set_onclick(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        true
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
pub struct MediaScheme {
    window: Window,
}

impl MediaScheme {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ColorSchemeQuery for MediaScheme {
    fn prefers_dark(&self) -> bool {
        match self.window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(err) => {
                log::debug!("matchMedia unavailable: {}", js_error_text(&err));
                false
            }
        }
    }
}

// ── Exports ─────────────────────────────────────────────────────

/// Module start hook: panic hook and console logger only.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already installed");
    }
}

/// Resolve the startup theme, bind `#darkmode-toggle`, and publish the global
/// toggle. `config_json` may override any [`ThemeConfig`] field.
///
/// # Errors
///
/// Rejects with a message when the page lacks a window, document, body, or
/// usable `localStorage`, or when the config is invalid.
#[wasm_bindgen(js_name = initDarkMode)]
pub fn init_dark_mode(config_json: Option<String>) -> Result<(), JsValue> {
    if MOUNTED.with(Cell::get) {
        log::warn!("initDarkMode called twice; ignoring");
        return Ok(());
    }
    let report = install(config_json.as_deref()).map_err(|err| JsValue::from_str(&err.to_string()))?;
    MOUNTED.with(|mounted| mounted.set(true));
    log::info!(
        "dark mode ready: {:?} ({:?}), trigger bound: {}",
        report.outcome.theme,
        report.outcome.source,
        report.trigger_bound
    );
    Ok(())
}

fn install(config_json: Option<&str>) -> Result<MountReport, ThemeError> {
    let config = match config_json {
        Some(raw) => ThemeConfig::from_json(raw)?,
        None => ThemeConfig::default(),
    };
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoDocument)?;
    let body = document.body().ok_or(ThemeError::NoBody)?;
    let store = LocalStorage::from_window(&window)?;

    let global_name = config.global_name.clone();
    let controller: PageController = Rc::new(RefCell::new(ThemeController::new(
        config,
        store,
        BodyClassList::new(&body),
        DocumentPage::new(document),
    )));

    // Export before mounting so a failed export leaves the page untouched.
    export_toggle(&window, &global_name, &controller)?;
    Ok(mount(&controller, &MediaScheme::new(window.clone())))
}

/// Set `window[name]` to a function that toggles and returns whether dark
/// mode is now active.
fn export_toggle(window: &Window, name: &str, controller: &PageController) -> Result<(), ThemeError> {
    let controller = Rc::clone(controller);
    let closure = Closure::wrap(
        Box::new(move || controller.borrow().toggle_dark_mode().is_dark()) as Box<dyn FnMut() -> bool>,
    );
    match js_sys::Reflect::set(window, &JsValue::from_str(name), closure.as_ref()) {
        Ok(true) => {
            closure.forget();
            Ok(())
        }
        Ok(false) => Err(ThemeError::Export(format!("window.{name} is not writable"))),
        Err(err) => Err(ThemeError::Export(js_error_text(&err))),
    }
}
