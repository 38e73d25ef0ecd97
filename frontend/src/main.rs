use crate::app::{App, AppProps};
use crate::config::AppConfig;

mod api;
mod app;
mod components;
mod config;
mod controller;
mod logger;
mod tops_sheet;

fn main() {
    let config = AppConfig::load();
    logger::init(config.log_level);
    log::info!("classification service at {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
