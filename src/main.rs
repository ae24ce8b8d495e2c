mod app;
mod config;
mod logging;
mod models;
mod mvu;
mod ui;

use std::path::Path;

use config::{AppConfig, CONFIG_FILE};

fn main() -> eframe::Result<()> {
    let (config, load_err) = match AppConfig::load(Path::new(CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    logging::init(&config.log_filter);
    if let Some(err) = load_err {
        tracing::warn!("{err:#}; using default settings");
    }

    app::run(&config)
}
