//! Theme controller: keeps the stored preference, the body styling flag, and
//! the status icon in agreement.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller is constructed per page by the startup sequence
//! (`mount`). It is the only writer of the preference key and of the
//! dark-styling flag; the icon is refreshed after every write so the glyph
//! can never disagree with the flag.
//!
//! TRADE-OFFS
//! ==========
//! Every operation is total. Storage write failures are logged and dropped
//! so a cosmetic preference never breaks the page.

use crate::config::ThemeConfig;
use crate::host::{ColorSchemeQuery, Page, PreferenceStore, ThemingTarget};
use crate::preference::{Theme, ThemePreference};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Which signal decided the startup theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    /// An explicit `"true"`/`"false"` in storage.
    Stored,
    /// Nothing stored; the system prefers dark.
    System,
    /// Nothing stored and no dark signal; the page's existing styling stands.
    Default,
}

/// Result of [`ThemeController::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitOutcome {
    pub theme: Theme,
    pub source: ThemeSource,
}

/// Owns the theme state for one page.
pub struct ThemeController<S, T, P> {
    config: ThemeConfig,
    store: S,
    target: T,
    page: P,
    initialized: Option<InitOutcome>,
}

impl<S, T, P> ThemeController<S, T, P>
where
    S: PreferenceStore,
    T: ThemingTarget,
    P: Page,
{
    pub fn new(config: ThemeConfig, store: S, target: T, page: P) -> Self {
        Self { config, store, target, page, initialized: None }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Outcome of the first [`Self::initialize`] call, if it has run.
    pub fn init_outcome(&self) -> Option<InitOutcome> {
        self.initialized
    }

    /// Theme currently applied to the target.
    pub fn current_theme(&self) -> Theme {
        Theme::from_dark(self.target.has_flag(&self.config.dark_class))
    }

    /// Apply `enabled`, persist it, and refresh the icon.
    pub fn set_dark_mode(&self, enabled: bool) {
        let theme = Theme::from_dark(enabled);
        if enabled {
            self.target.add_flag(&self.config.dark_class);
        } else {
            self.target.remove_flag(&self.config.dark_class);
        }
        if let Err(err) = self.store.set(&self.config.storage_key, theme.storage_value()) {
            log::warn!("theme preference not persisted: {err}");
        }
        log::debug!("theme set: {theme:?}");
        self.update_dark_icon();
    }

    /// Invert the applied theme and return the new one.
    pub fn toggle_dark_mode(&self) -> Theme {
        let next = self.current_theme().inverted();
        self.set_dark_mode(next.is_dark());
        next
    }

    /// Sync the icon glyph to the styling flag. Returns `false` when the page
    /// has no icon element.
    pub fn update_dark_icon(&self) -> bool {
        let glyph = self.config.glyph(self.current_theme());
        self.page.set_text(&self.config.icon_id, glyph)
    }

    /// Resolve the startup theme: stored preference first, then the system
    /// signal, else leave the page's styling as it is.
    ///
    /// Runs once; later calls return the first outcome unchanged.
    pub fn initialize(&mut self, system: &impl ColorSchemeQuery) -> InitOutcome {
        if let Some(outcome) = self.initialized {
            log::debug!("theme controller already initialized");
            return outcome;
        }

        let stored = self.store.get(&self.config.storage_key);
        let preference = ThemePreference::from_stored(stored.as_deref());

        let outcome = if let Some(theme) = preference.theme() {
            self.set_dark_mode(theme.is_dark());
            InitOutcome { theme, source: ThemeSource::Stored }
        } else if system.prefers_dark() {
            self.set_dark_mode(true);
            InitOutcome { theme: Theme::Dark, source: ThemeSource::System }
        } else {
            self.update_dark_icon();
            InitOutcome { theme: self.current_theme(), source: ThemeSource::Default }
        };

        log::info!("theme initialized: {:?} from {:?}", outcome.theme, outcome.source);
        self.initialized = Some(outcome);
        outcome
    }
}
