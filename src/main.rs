use bevy::prelude::*;
use wheel_of_fortune::{ConfigLoadReport, WheelConfig, WheelOfFortunePlugin};

// ---------------- Config Loading ----------------

#[cfg(target_arch = "wasm32")]
fn load_config() -> (WheelConfig, ConfigLoadReport) {
    // Embed base config (no layered local override on wasm).
    const RAW: &str = include_str!("../assets/config/wheel.ron");
    match WheelConfig::from_ron(RAW) {
        Ok(cfg) => (
            cfg,
            ConfigLoadReport {
                used: vec!["<embedded wheel.ron>".into()],
                errors: Vec::new(),
            },
        ),
        Err(e) => (
            WheelConfig::default(),
            ConfigLoadReport {
                used: Vec::new(),
                errors: vec![format!("embedded config: {e}; using defaults")],
            },
        ),
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "wheel_of_fortune", version, about = "Spin a configurable wheel of fortune")]
struct Cli {
    /// Config layer(s) merged in order; replaces the default
    /// assets/config/wheel.ron + wheel.local.ron pair.
    #[arg(long = "config", value_name = "PATH")]
    configs: Vec<std::path::PathBuf>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long, value_name = "SECS", value_parser = parse_auto_close)]
    auto_close: Option<f32>,
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_auto_close(raw: &str) -> Result<f32, String> {
    let secs: f32 = raw.parse().map_err(|e| format!("{e}"))?;
    let window = wheel_of_fortune::WindowConfig {
        auto_close: secs,
        ..Default::default()
    };
    if secs != 0.0 && window.auto_close_duration().is_none() {
        return Err(format!("`{raw}` is not a usable number of seconds (use 0 to disable)"));
    }
    Ok(secs)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> (WheelConfig, ConfigLoadReport) {
    use clap::Parser;
    let cli = Cli::parse();
    let layers = if cli.configs.is_empty() {
        WheelConfig::default_layers("assets/config")
    } else {
        cli.configs
    };
    let (mut cfg, used, errors) = WheelConfig::load_layered(&layers);
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    (cfg, ConfigLoadReport { used, errors })
}

// ---------------- Main ----------------

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let (cfg, report) = load_config();
    if cfg.window.width <= 0.0 || cfg.window.height <= 0.0 {
        anyhow::bail!(
            "window size {}x{} is not drawable",
            cfg.window.width,
            cfg.window.height
        );
    }

    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(cfg)
        .insert_resource(report)
        .add_plugins(WheelOfFortunePlugin)
        .run();
    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("app exited with code {code}"),
    }
}
