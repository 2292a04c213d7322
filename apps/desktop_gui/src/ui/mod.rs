//! UI layer for the admin console: app shell and the three screens.

pub mod app;

pub use app::{AdminApp, AdminTab, PersistedUiSettings, SETTINGS_STORAGE_KEY};
