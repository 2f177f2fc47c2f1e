use std::sync::Arc;

use anyhow::{Context, Result};
use car_compare::app::CarCompareApp;
use car_compare::config::{AppConfig, Cli};
use car_compare::data::loader;
use car_compare::headless;
use car_compare::images::ImageCatalog;
use car_compare::state::AppState;
use car_compare::ui::fonts;
use clap::Parser;
use eframe::egui;

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    init_logging(config.verbose);

    run(config).inspect_err(|e| log::error!("{e:#}"))
}

fn run(config: AppConfig) -> Result<()> {
    let images = match &config.images_path {
        Some(path) => ImageCatalog::with_overrides(path)?,
        None => ImageCatalog::default(),
    };

    // A broken or missing table aborts startup.
    let catalog = loader::load(&config.data_path, config.delimiter)
        .with_context(|| format!("loading {}", config.data_path.display()))?;

    if let Some(picks) = &config.picks {
        let stdout = std::io::stdout();
        headless::run(Arc::new(catalog), picks, &config.export_path, &mut stdout.lock())?;
        return Ok(());
    }

    let mut state = AppState {
        images,
        delimiter: config.delimiter,
        export_path: config.export_path.clone(),
        ..AppState::default()
    };
    state
        .set_catalog(catalog)
        .context("the vehicle table has no complete rows")?;

    run_gui(state, &config)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn run_gui(state: AppState, config: &AppConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    log::info!("Opening viewer for {}", config.data_path.display());
    eframe::run_native(
        "차량 스펙 비교기",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can fetch and decode jpg/png from URLs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            fonts::install_cjk_fallback(&cc.egui_ctx);
            Ok(Box::new(CarCompareApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
