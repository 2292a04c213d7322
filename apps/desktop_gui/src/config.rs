//! Startup configuration: defaults, overridden by an optional `admin.toml`
//! next to the binary, then by environment variables, then by CLI flags.

use std::{collections::HashMap, fs, path::Path};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
    pub initial_screen: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            window_title: "Coordination Platform Admin".to_string(),
            window_width: 1180.0,
            window_height: 760.0,
            log_filter: "info".to_string(),
            initial_screen: "organizations".to_string(),
        }
    }
}

pub fn load_startup_config(path: &Path) -> StartupConfig {
    let mut config = StartupConfig::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("window_title") {
                config.window_title = v.clone();
            }
            if let Some(v) = file_cfg.get("window_width").and_then(|v| v.parse().ok()) {
                config.window_width = v;
            }
            if let Some(v) = file_cfg.get("window_height").and_then(|v| v.parse().ok()) {
                config.window_height = v;
            }
            if let Some(v) = file_cfg.get("log_filter") {
                config.log_filter = v.clone();
            }
            if let Some(v) = file_cfg.get("initial_screen") {
                config.initial_screen = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("ADMIN__WINDOW_TITLE") {
        config.window_title = v;
    }
    if let Ok(v) = std::env::var("ADMIN__LOG_FILTER") {
        config.log_filter = v;
    }
    if let Ok(v) = std::env::var("ADMIN__INITIAL_SCREEN") {
        config.initial_screen = v;
    }

    config
}
