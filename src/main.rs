#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::mpsc;

use eframe::egui;

use prompt_overlay::geometry::{MIN_HEIGHT, MIN_WIDTH};
use prompt_overlay::gui::OverlayApp;
use prompt_overlay::settings::{self, OverlayConfig};
use prompt_overlay::{global_hotkey, hotkey, logging, updater};

fn main() {
    // A startup failure is the only condition that exits non-zero; everything
    // after the window is up degrades in place instead.
    if let Err(e) = run() {
        eprintln!("startup failed: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config_path = settings::config_path();
    let config = OverlayConfig::load(&config_path);

    let log_file = config
        .debug_logging
        .then(|| config_path.with_file_name("prompt_overlay.log"));
    logging::init(config.debug_logging, log_file);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let (action_tx, action_rx) = mpsc::channel();
    let hotkeys = global_hotkey::start(hotkey::default_bindings(), action_tx);

    let (update_tx, update_rx) = mpsc::channel();
    updater::spawn_update_check(env!("CARGO_PKG_VERSION").to_string(), update_tx);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT])
            .with_position([config.x, config.y])
            .with_decorations(false)
            .with_resizable(true)
            .with_always_on_top(),
        ..Default::default()
    };

    let app = OverlayApp::new(config, config_path, action_rx, update_rx, hotkeys);
    eframe::run_native(
        "PromptOverlay",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the overlay window: {e}"))?;

    Ok(())
}
