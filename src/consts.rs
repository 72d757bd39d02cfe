//! Fixed names shared between the controller, its config defaults, and the page.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "dark-mode";

/// Stored value for an explicit dark preference.
pub const STORED_DARK: &str = "true";

/// Stored value for an explicit light preference.
pub const STORED_LIGHT: &str = "false";

// ── Document ────────────────────────────────────────────────────

/// Class placed on `<body>` while dark mode is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Element whose text shows the current theme glyph.
pub const ICON_ID: &str = "darkmode-icon";

/// Element that toggles the theme when clicked.
pub const TOGGLE_ID: &str = "darkmode-toggle";

// ── Glyphs ──────────────────────────────────────────────────────

/// Moon, shown while dark mode is active.
pub const DARK_GLYPH: &str = "🌙";

/// Sun, shown while light mode is active.
pub const LIGHT_GLYPH: &str = "☀️";

// ── Environment ─────────────────────────────────────────────────

/// Media query for the system-level dark preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Property on `window` that exposes the toggle to inline handlers.
pub const GLOBAL_TOGGLE_NAME: &str = "toggleDarkMode";
