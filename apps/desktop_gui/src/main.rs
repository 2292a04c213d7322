use std::path::PathBuf;

mod config;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use tracing::info;

use crate::config::load_startup_config;
use crate::ui::{AdminApp, AdminTab, PersistedUiSettings, SETTINGS_STORAGE_KEY};

#[derive(Debug, Parser)]
#[command(name = "desktop_gui", about = "Coordination platform admin console")]
struct Cli {
    /// Optional startup config file.
    #[arg(long, default_value = "admin.toml")]
    config: PathBuf,
    /// Tracing filter override, e.g. "debug" or "admin_core=debug".
    #[arg(long)]
    log_filter: Option<String>,
    /// Screen to open on launch: organizations, volunteers, or reports.
    #[arg(long)]
    screen: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_startup_config(&cli.config);
    if let Some(filter) = cli.log_filter {
        config.log_filter = filter;
    }
    let screen_override = cli.screen.as_deref().and_then(AdminTab::from_name);

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter.as_str())
        .init();
    info!(screen = %config.initial_screen, "starting admin console");

    let default_tab =
        AdminTab::from_name(&config.initial_screen).unwrap_or(AdminTab::Organizations);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([860.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(SETTINGS_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedUiSettings>(&text).ok())
            });
            Ok(Box::new(AdminApp::new(default_tab, screen_override, persisted)))
        }),
    )
    .map_err(|err| anyhow!("desktop app exited with error: {err}"))
}
