//! Theme controller configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every name the controller touches (storage key, body class, element ids,
//! glyphs, global export) lives here so a host page can rename them without
//! rebuilding. `Default` reproduces the stock page markup exactly.

use serde::Deserialize;

use crate::consts::{
    DARK_CLASS, DARK_GLYPH, GLOBAL_TOGGLE_NAME, ICON_ID, LIGHT_GLYPH, STORAGE_KEY, TOGGLE_ID,
};
use crate::error::ThemeError;
use crate::preference::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Names and glyphs used by [`crate::controller::ThemeController`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub icon_id: String,
    pub toggle_id: String,
    pub dark_glyph: String,
    pub light_glyph: String,
    pub global_name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            dark_class: DARK_CLASS.to_owned(),
            icon_id: ICON_ID.to_owned(),
            toggle_id: TOGGLE_ID.to_owned(),
            dark_glyph: DARK_GLYPH.to_owned(),
            light_glyph: LIGHT_GLYPH.to_owned(),
            global_name: GLOBAL_TOGGLE_NAME.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a (possibly partial) JSON object. Missing fields keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] for malformed JSON or an empty name.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty names; an empty class or key would silently break the page.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("dark_class", &self.dark_class),
            ("icon_id", &self.icon_id),
            ("toggle_id", &self.toggle_id),
            ("global_name", &self.global_name),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ThemeError::Config(format!("{name} must not be empty"))),
            None => Ok(()),
        }
    }

    /// Glyph for `theme`.
    pub fn glyph(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.dark_glyph,
            Theme::Light => &self.light_glyph,
        }
    }
}
