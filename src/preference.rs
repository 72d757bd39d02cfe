//! Theme values: the tri-state startup preference and the applied theme.

use crate::consts::{STORED_DARK, STORED_LIGHT};

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// Applied theme. Mirrors the presence of the dark-styling flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn from_dark(enabled: bool) -> Self {
        if enabled { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The opposite theme.
    pub fn inverted(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// String written to storage for this theme.
    pub fn storage_value(self) -> &'static str {
        match self {
            Self::Dark => STORED_DARK,
            Self::Light => STORED_LIGHT,
        }
    }
}

/// Preference as observed at startup, before any fallback is consulted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
    /// Nothing usable was stored.
    #[default]
    Unset,
}

impl ThemePreference {
    /// Decode a raw stored value. Only the exact literals `"true"` and
    /// `"false"` count; anything else (including absence) is `Unset`.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some(STORED_DARK) => Self::Dark,
            Some(STORED_LIGHT) => Self::Light,
            _ => Self::Unset,
        }
    }

    /// The theme this preference pins, if any.
    pub fn theme(self) -> Option<Theme> {
        match self {
            Self::Dark => Some(Theme::Dark),
            Self::Light => Some(Theme::Light),
            Self::Unset => None,
        }
    }
}
