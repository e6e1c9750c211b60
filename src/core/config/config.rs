use bevy::prelude::*;
use serde::Deserialize;
use std::f32::consts::{PI, TAU};
use std::time::Duration;
use std::fs;
use std::path::{Path, PathBuf};

use super::color::parse_color;
use super::error::ConfigError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl WindowConfig {
    /// Auto-close delay, or `None` when disabled. Negative, non-finite and
    /// unrepresentably large values all disable it.
    pub fn auto_close_duration(&self) -> Option<Duration> {
        let secs = self.auto_close;
        if !secs.is_finite() || secs <= 0.0 {
            return None;
        }
        Duration::try_from_secs_f32(secs).ok()
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 600.0,
            title: "Wheel of Fortune".into(),
            auto_close: 0.0,
        }
    }
}

/// Angular width assigned to each wheel segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentSpan {
    /// Every segment covers 60° no matter how many colours are configured.
    #[default]
    Fixed,
    /// Segments share the full circle evenly (`2π / count`).
    Even,
}
impl SegmentSpan {
    pub const FIXED_ANGLE: f32 = PI / 3.0;

    /// Span in radians for a wheel with `count` segments.
    pub fn angle(self, count: usize) -> f32 {
        match self {
            SegmentSpan::Fixed => Self::FIXED_ANGLE,
            SegmentSpan::Even => TAU / count.max(1) as f32,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WheelSpinConfig {
    /// Fill colour per segment, in drawing order.
    pub sectors: Vec<String>,
    pub target_sector_index: usize,
    pub spin_cycles: i32,
    pub total_spin_time_ms: u64,
    pub even_segments: bool,
}
impl Default for WheelSpinConfig {
    fn default() -> Self {
        Self {
            sectors: ["red", "orange", "yellow", "green", "blue", "purple"]
                .into_iter()
                .map(String::from)
                .collect(),
            target_sector_index: 2,
            spin_cycles: 3,
            total_spin_time_ms: 4000,
            even_segments: false,
        }
    }
}
impl WheelSpinConfig {
    pub fn segment_span(&self) -> SegmentSpan {
        if self.even_segments {
            SegmentSpan::Even
        } else {
            SegmentSpan::Fixed
        }
    }

    pub fn span_angle(&self) -> f32 {
        self.segment_span().angle(self.sectors.len())
    }

    /// Final wheel rotation in radians: the target segment offset plus the
    /// extra full turns.
    pub fn target_rotation(&self) -> f32 {
        self.target_sector_index as f32 * self.span_angle() + self.spin_cycles as f32 * TAU
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.total_spin_time_ms)
    }
}

/// Geometry and static colours of the wheel face and pointer overlay.
/// Points are world units relative to `center` (y up).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WheelLayoutConfig {
    pub center: (f32, f32),
    pub radius: f32,
    pub face_color: String,
    pub pointer_color: String,
    pub pointer_tip: (f32, f32),
    pub pointer_left: (f32, f32),
    pub pointer_right: (f32, f32),
}
impl Default for WheelLayoutConfig {
    fn default() -> Self {
        Self {
            center: (0.0, 50.0),
            radius: 200.0,
            face_color: "lightgray".into(),
            pointer_color: "black".into(),
            pointer_tip: (0.0, 200.0),
            pointer_left: (-20.0, 100.0),
            pointer_right: (20.0, 100.0),
        }
    }
}
impl WheelLayoutConfig {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center.0, self.center.1)
    }
    pub fn pointer_points(&self) -> [Vec2; 3] {
        [self.pointer_tip, self.pointer_left, self.pointer_right].map(|(x, y)| Vec2::new(x, y))
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct WheelConfig {
    pub window: WindowConfig,
    pub wheel: WheelSpinConfig,
    pub layout: WheelLayoutConfig,
}

impl WheelConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron(&data).map_err(|e| e.with_path(path))
    }

    pub fn from_ron(data: &str) -> Result<Self, ConfigError> {
        ron::from_str(data).map_err(|source| ConfigError::Parse {
            path: String::new(),
            source,
        })
    }

    /// Default layer list under `dir`: `wheel.ron`, then `wheel.local.ron`
    /// only when that optional override exists.
    pub fn default_layers(dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let dir = dir.as_ref();
        let mut layers = vec![dir.join("wheel.ron")];
        let local = dir.join("wheel.local.ron");
        if local.exists() {
            layers.push(local);
        }
        layers
    }

    /// Reads every existing layer in order and merges maps key by key (later
    /// layers win). Never fails: returns the merged config (defaults when
    /// nothing usable was found), the layers used, and per-layer errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (WheelConfig::default(), used, errors);
        };
        match val.into_rust::<WheelConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (WheelConfig::default(), used, errors)
            }
        }
    }

    /// Non-fatal configuration warnings. The wheel still renders and spins
    /// with any of these present.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        let auto_close = self.window.auto_close;
        if auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {auto_close} negative -> treated as disabled (should be >= 0)"
            ));
        } else if auto_close > 0.0 && self.window.auto_close_duration().is_none() {
            w.push(format!(
                "window.autoClose {auto_close} is not a usable number of seconds -> treated as disabled"
            ));
        }
        let wheel = &self.wheel;
        if wheel.sectors.is_empty() {
            w.push("wheel.sectors is empty; nothing will be drawn".into());
        } else if wheel.target_sector_index >= wheel.sectors.len() {
            w.push(format!(
                "wheel.target_sector_index {} out of bounds for {} sectors",
                wheel.target_sector_index,
                wheel.sectors.len()
            ));
        }
        if wheel.segment_span() == SegmentSpan::Fixed && !wheel.sectors.is_empty() && wheel.sectors.len() != 6 {
            w.push(format!(
                "wheel.sectors has {} entries but segments are fixed at 60°; set even_segments: true to share the circle",
                wheel.sectors.len()
            ));
        }
        for (i, s) in wheel.sectors.iter().enumerate() {
            if let Err(e) = parse_color(s) {
                w.push(format!("wheel.sectors[{i}]: {e}"));
            }
        }
        if wheel.spin_cycles < 0 {
            w.push(format!(
                "wheel.spin_cycles {} negative; wheel will turn backwards",
                wheel.spin_cycles
            ));
        }
        if wheel.total_spin_time_ms == 0 {
            w.push("wheel.total_spin_time_ms must be > 0; spin completes instantly".into());
        }
        if self.layout.radius <= 0.0 {
            w.push(format!("layout.radius {} must be > 0", self.layout.radius));
        }
        for (label, value) in [
            ("layout.face_color", &self.layout.face_color),
            ("layout.pointer_color", &self.layout.pointer_color),
        ] {
            if let Err(e) = parse_color(value) {
                w.push(format!("{label}: {e}"));
            }
        }
        w
    }
}
