use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::project_dirs;

pub const WINDOW_TITLE: &str = "COVID-19 Data Dashboard";

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

pub fn desktop_config(webview_data_dir: Option<PathBuf>) -> dioxus::desktop::Config {
    let config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title(WINDOW_TITLE));
    match webview_data_dir {
        Some(dir) => config.with_data_directory(dir),
        None => config,
    }
}
