//! Dark/light theme toggle for server-rendered pages, compiled to WebAssembly.
//!
//! A [`controller::ThemeController`] keeps three things in agreement: the
//! preference persisted in `localStorage`, the `dark-mode` class on
//! `<body>`, and the glyph in the page's status icon. On startup the
//! persisted preference wins; without one the system color-scheme hint is
//! consulted once.
//!
//! Everything outside `web` is plain Rust over the traits in [`host`], so
//! the controller is exercised natively against the [`memory`] hosts. The
//! `hydrate` feature adds the `web-sys` adapters and the wasm exports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | The controller and its four operations |
//! | [`mount`] | Startup: initialize, then bind the toggle trigger |
//! | [`preference`] | `ThemePreference` (startup tri-state) and `Theme` |
//! | [`config`] | Overridable names and glyphs |
//! | [`host`] | Storage, styling target, page, and color-scheme traits |
//! | [`memory`] | In-memory host implementations |
//! | [`error`] | Host and startup errors |
//! | [`consts`] | Stock names used by the default config |
//! | `web` | Browser adapters and `initDarkMode` (feature `hydrate`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod host;
pub mod memory;
pub mod mount;
pub mod preference;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::{InitOutcome, ThemeController, ThemeSource};
pub use error::ThemeError;
pub use preference::{Theme, ThemePreference};
