//! Startup sequence: resolve the initial theme, then wire the toggle trigger.

use std::cell::RefCell;
use std::rc::Rc;

use crate::controller::{InitOutcome, ThemeController};
use crate::host::{ActivateHandler, ColorSchemeQuery, Page, PreferenceStore, ThemingTarget};

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

/// Controller shared between the page's click handlers and the global export.
pub type SharedController<S, T, P> = Rc<RefCell<ThemeController<S, T, P>>>;

/// What [`mount`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountReport {
    pub outcome: InitOutcome,
    /// Whether a toggle-trigger element was found and bound.
    pub trigger_bound: bool,
}

/// Initialize `controller` and bind its toggle to the page's trigger element,
/// if the page has one.
pub fn mount<S, T, P>(controller: &SharedController<S, T, P>, system: &impl ColorSchemeQuery) -> MountReport
where
    S: PreferenceStore + 'static,
    T: ThemingTarget + 'static,
    P: Page + 'static,
{
    let outcome = controller.borrow_mut().initialize(system);

    let handler = toggle_handler(controller);
    let trigger_bound = {
        let ctrl = controller.borrow();
        ctrl.page().bind_activate(&ctrl.config().toggle_id, handler)
    };
    if !trigger_bound {
        log::debug!("no toggle trigger on page; relying on global export");
    }

    MountReport { outcome, trigger_bound }
}

/// Closure that toggles `controller` when invoked.
pub fn toggle_handler<S, T, P>(controller: &SharedController<S, T, P>) -> ActivateHandler
where
    S: PreferenceStore + 'static,
    T: ThemingTarget + 'static,
    P: Page + 'static,
{
    let controller = Rc::clone(controller);
    Box::new(move || {
        controller.borrow().toggle_dark_mode();
    })
}
