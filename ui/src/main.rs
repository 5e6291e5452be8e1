#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Arc;

use qrstudio_business::{BusinessConfig, GeminiAnalyzer};
use qrstudio_clipboard::SystemClipboard;
use qrstudio_ui::QrStudioApp;
use qrstudio_ui::state::State;
use qrstudio_ui::utils::save_target::DialogSaveTarget;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // RUST_LOG overrides the default level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("qrstudio-worker")
        .enable_all()
        .build()
        .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    let config = BusinessConfig::from_env().unwrap_or_else(|e| {
        log::warn!("{e}, continuing with defaults");
        BusinessConfig::default()
    });
    let analyzer = Arc::new(GeminiAnalyzer::new(config));
    let handle = runtime.handle().clone();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_title("QR Studio")
            .with_inner_size([820.0, 560.0])
            .with_min_inner_size([600.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QR Studio",
        native_options,
        Box::new(move |_cc| {
            let state = State::new(
                analyzer,
                handle,
                Arc::new(SystemClipboard::new()),
                Box::new(DialogSaveTarget),
            );
            Ok(Box::new(QrStudioApp::new(state)))
        }),
    )
}
