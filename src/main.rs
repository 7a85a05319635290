#![allow(warnings)]
//! Lost & Found Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;
use lost_found_core::{Controller, ItemStore};

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = config::load_board_config();
    logger::init(config.log_level_filter());

    let board = Controller::from_config(config.clone()).unwrap_or_else(|e| {
        log::error!("[APP] {}; starting with an empty board", e);
        Controller::new(ItemStore::new(), config)
    });

    mount_to_body(move || view! { <App board=board /> });
}
