use heartcheck::application::client::PredictionClient;
use heartcheck::application::predict_action::PredictAction;
use heartcheck::application::screen::PredictionScreen;
use heartcheck::config::Config;
use heartcheck::infrastructure::HttpPredictionClient;
use std::sync::Arc;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Starting heartcheck {}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!("Prediction endpoint: {}", config.client.endpoint);

    // 2. Tokio runtime on a background thread; the UI owns the main thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let handle = runtime.handle().clone();

    let (shutdown_tx, shutdown_rx) = crossbeam_channel::bounded::<()>(1);
    let runtime_thread = std::thread::spawn(move || {
        runtime.block_on(async move {
            info!("Background Runtime Started.");
            // Park until the UI exits; the runtime must outlive every spawned request.
            let _ = tokio::task::spawn_blocking(move || shutdown_rx.recv()).await;
        });
    });

    // 3. Wire the screen
    let service = Arc::new(HttpPredictionClient::new(&config.client));
    let client = PredictionClient::new(handle, PredictAction::new(service));
    let screen = PredictionScreen::new(client);

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([560.0, 820.0])
            .with_title("heartcheck"),
        ..Default::default()
    };

    let ui_result = eframe::run_native(
        "heartcheck",
        native_options,
        Box::new(|_cc| Ok(Box::new(screen))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e));

    let _ = shutdown_tx.send(());
    let _ = runtime_thread.join();

    ui_result
}
