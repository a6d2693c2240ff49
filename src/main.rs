#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use dioxus::logger::tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        tracing::warn!("Logger already initialized: {}", e);
    }

    tracing::info!("Starting Guide Directory");

    dioxus::launch(app::App);
}
