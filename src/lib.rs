//! Wavescape - an animated, shader-colored ocean plane with a live tuning panel

pub mod camera;
pub mod cli;
pub mod ocean;
pub mod panel;
pub mod params;
pub mod rendering;
