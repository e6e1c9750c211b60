//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. WheelInput (button presses -> activation)
//! 2. WheelAnimate (advance the in-flight spin, rotate the wheel surface)
//! 3. WheelRender (redraw surfaces on request)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct WheelInputSet; // activation control handling

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct WheelAnimateSet; // spin step, after input so a fresh spin animates the same frame

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct WheelRenderSet; // surface redraw
