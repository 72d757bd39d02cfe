use super::*;
use crate::config::ThemeConfig;
use crate::controller::ThemeSource;
use crate::memory::{FixedScheme, MemoryPage, MemoryStore, MemoryTarget};
use crate::preference::Theme;

const ICON: &str = "darkmode-icon";
const TOGGLE: &str = "darkmode-toggle";

fn shared(
    store: &MemoryStore,
    target: &MemoryTarget,
    page: &MemoryPage,
) -> SharedController<MemoryStore, MemoryTarget, MemoryPage> {
    Rc::new(RefCell::new(ThemeController::new(
        ThemeConfig::default(),
        store.clone(),
        target.clone(),
        page.clone(),
    )))
}

#[test]
fn mount_binds_trigger_and_click_toggles() {
    let (store, target) = (MemoryStore::new(), MemoryTarget::new());
    let page = MemoryPage::with_elements(&[ICON, TOGGLE]);
    let controller = shared(&store, &target, &page);

    let report = mount(&controller, &FixedScheme(false));
    assert!(report.trigger_bound);
    assert_eq!(report.outcome.source, ThemeSource::Default);
    assert!(store.is_empty());

    assert!(page.activate(TOGGLE));
    assert!(target.has_flag("dark-mode"));
    assert_eq!(store.get("dark-mode").as_deref(), Some("true"));
    assert_eq!(page.text(ICON).as_deref(), Some("🌙"));

    assert!(page.activate(TOGGLE));
    assert!(!target.has_flag("dark-mode"));
    assert_eq!(page.text(ICON).as_deref(), Some("☀️"));
}

#[test]
fn mount_without_trigger_completes() {
    let (store, target) = (MemoryStore::new(), MemoryTarget::new());
    let page = MemoryPage::with_elements(&[ICON]);
    let controller = shared(&store, &target, &page);

    let report = mount(&controller, &FixedScheme(true));
    assert!(!report.trigger_bound);
    assert_eq!(report.outcome.theme, Theme::Dark);
    assert!(!page.has_handler(TOGGLE));
}

#[test]
fn mount_on_empty_page_completes() {
    let (store, target) = (MemoryStore::new(), MemoryTarget::new());
    let page = MemoryPage::empty();
    let controller = shared(&store, &target, &page);

    let report = mount(&controller, &FixedScheme(false));
    assert!(!report.trigger_bound);
    assert_eq!(report.outcome.theme, Theme::Light);
}

#[test]
fn toggle_handler_acts_like_global_export() {
    let (store, target) = (MemoryStore::with_item("dark-mode", "true"), MemoryTarget::new());
    let page = MemoryPage::with_elements(&[ICON]);
    let controller = shared(&store, &target, &page);
    mount(&controller, &FixedScheme(false));
    assert!(target.has_flag("dark-mode"));

    let mut handler = toggle_handler(&controller);
    handler();
    assert!(!target.has_flag("dark-mode"));
    assert_eq!(store.get("dark-mode").as_deref(), Some("false"));
    handler();
    assert!(target.has_flag("dark-mode"));
}

#[test]
fn toggle_handler_binds_directly_to_page() {
    let (store, target) = (MemoryStore::new(), MemoryTarget::new());
    let page = MemoryPage::with_elements(&[ICON, TOGGLE]);
    let controller = shared(&store, &target, &page);

    assert!(page.bind_activate(TOGGLE, toggle_handler(&controller)));
    assert!(page.activate(TOGGLE));
    assert!(target.has_flag("dark-mode"));
    assert_eq!(page.text(ICON).as_deref(), Some("🌙"));
}
