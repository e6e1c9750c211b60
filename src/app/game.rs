// This file is part of Wheel of Fortune.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use super::spin::SpinAnimationPlugin;
use crate::core::config::WheelConfig;
use crate::core::system::system_order::{WheelAnimateSet, WheelInputSet, WheelRenderSet};
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::spin_button::SpinButtonPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::wheel::WheelRenderPlugin;

/// Outcome of configuration loading, logged once the log plugin is up.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
}

/// The whole widget: wheel + pointer surfaces, spin button, spin animation.
/// Expects a [`WheelConfig`] resource; falls back to defaults when absent.
pub struct WheelOfFortunePlugin;

impl Plugin for WheelOfFortunePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WheelConfig>()
            .init_resource::<ConfigLoadReport>()
            .configure_sets(
                Update,
                (WheelInputSet, WheelAnimateSet, WheelRenderSet).chain(),
            )
            .add_plugins((
                CameraPlugin,
                WheelRenderPlugin,
                SpinButtonPlugin,
                SpinAnimationPlugin,
                AutoClosePlugin,
                #[cfg(feature = "debug")]
                DebugPlugin,
            ))
            .add_systems(Startup, log_config_report);
    }
}

fn log_config_report(cfg: Res<WheelConfig>, report: Res<ConfigLoadReport>) {
    for e in &report.errors {
        warn!(target: "config", "CONFIG LOAD ISSUE: {e}");
    }
    if report.used.is_empty() {
        info!(target: "config", "No config layers found; using defaults");
    } else {
        info!(target: "config", used = ?report.used, "Config layers loaded");
    }
    // Log validation warnings (non-fatal)
    for w in cfg.validate() {
        warn!(target: "config", "CONFIG WARNING: {w}");
    }
}
