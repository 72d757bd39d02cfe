//! Error taxonomy for host adapters and startup.
//!
//! Controller operations never surface these to their callers. They appear
//! only where a host collaborator is constructed or written to, and at the
//! `initDarkMode` boundary where they become a `JsValue`.

/// Failure raised by a host collaborator or during startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// No global `window` object (not running in a browser main thread).
    #[error("no window object")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<body>` element yet.
    #[error("document has no body")]
    NoBody,
    /// `localStorage` threw on access or is disabled.
    #[error("local storage unavailable: {0}")]
    StorageUnavailable(String),
    /// Writing the preference to storage failed (quota, privacy mode, ...).
    #[error("failed to write preference: {0}")]
    StorageWrite(String),
    /// Theme configuration could not be parsed or is invalid.
    #[error("invalid theme config: {0}")]
    Config(String),
    /// Registering the global toggle on `window` failed.
    #[error("failed to export toggle: {0}")]
    Export(String),
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
