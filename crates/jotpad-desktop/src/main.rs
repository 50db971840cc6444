//! Jotpad Desktop Application
//!
//! A desktop client for the Jotpad notes service.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jotpad=debug")),
        )
        .init();

    tracing::info!("Starting Jotpad...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Jotpad")
            .with_inner_size(LogicalSize::new(960.0, 720.0)),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
