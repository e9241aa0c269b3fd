//! Entry point for the Hearth Chat desktop app.

use std::path::PathBuf;

use anyhow::Context;
use dioxus::desktop::{Config, LogicalPosition, LogicalSize, WindowBuilder};
use hearth_chat::CHAT_CSS;
use hearth_chat::components::app::App;
use hearth_chat::state::HostConfig;
use hearth_logging::{HearthSubscriberBuilder, LogConfig, SessionContextGuard};
use hearth_ui::{SHEET_CSS, set_startup_theme};

fn main() -> anyhow::Result<()> {
    // HEARTH_LOG_DIR switches to rotating JSONL files
    let log_config = match std::env::var_os("HEARTH_LOG_DIR") {
        Some(dir) => LogConfig::production(PathBuf::from(dir)),
        None => LogConfig::development(),
    };
    let _log_guard = HearthSubscriberBuilder::new()
        .with_config(log_config)
        .with_level("hearth_chat=info,hearth_ui=debug")
        .try_init()
        .context("failed to initialize logging")?;

    let host = HostConfig::from_env().context("failed to load action sheet config")?;
    let _session = SessionContextGuard::new(host.user.id.as_str());

    // Set initial theme
    set_startup_theme(host.sheet.theme);

    let window_title = format!("Hearth Chat - {}", host.user.name);
    tracing::info!(
        reactions = host.sheet.supported_reactions.len(),
        theme = host.sheet.theme.css_value(),
        "Starting {}",
        window_title
    );

    // Optional window geometry for tiling several instances side by side
    let win_x = env_f64("HEARTH_WIN_X");
    let win_y = env_f64("HEARTH_WIN_Y");
    let win_w = env_f64("HEARTH_WIN_W");
    let win_h = env_f64("HEARTH_WIN_H");

    let mut wb = WindowBuilder::new()
        .with_title(&window_title)
        .with_maximized(false);

    if let (Some(w), Some(h)) = (win_w, win_h) {
        wb = wb.with_inner_size(LogicalSize::new(w, h));
    } else {
        wb = wb.with_inner_size(LogicalSize::new(420.0, 720.0));
    }

    if let (Some(x), Some(y)) = (win_x, win_y) {
        wb = wb.with_position(LogicalPosition::new(x, y));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(r#"<style>{SHEET_CSS}{CHAT_CSS}</style>"#)),
        )
        .with_context(host)
        .launch(App);

    Ok(())
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|v| v.parse::<f64>().ok())
}
