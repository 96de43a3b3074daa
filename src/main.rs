mod app;
mod cli;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use std::io;

use anyhow::{Context, Result};

use app::NativeCharts;
use cli::Menu;
use config::Config;
use data::store::CameraStore;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env();
    let dataset = data::loader::load_file(&config.dataset_path)
        .context("cannot start without the camera dataset")?;

    let store = CameraStore::new(dataset);
    if store.is_empty() {
        log::warn!("{} has no rows", config.dataset_path.display());
    } else {
        log::debug!("Starting menu with {} cameras", store.len());
    }
    let mut menu = Menu::new(store, io::stdin().lock(), io::stdout(), NativeCharts);
    menu.run()
}
