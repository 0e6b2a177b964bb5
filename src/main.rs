//! Portfolio Frontend Entry Point

mod models;
mod data;
mod config;
mod theme;
mod relay;
mod contact;
mod particles;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");
    mount_to_body(App);
}
