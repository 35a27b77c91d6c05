mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use tracing::{error, info};

use crate::platform::desktop::window::{default_webview_data_dir, desktop_config};

fn main() {
    tracing_subscriber::fmt::init();

    let webview_data_dir = match default_webview_data_dir() {
        Ok(dir) => Some(dir),
        Err(err) => {
            error!("webview data directory unavailable, using the default: {err:#}");
            None
        }
    };

    info!("starting dashboard");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config(webview_data_dir))
        .launch(app::App);
}
