//! Parameter definitions with documented defaults and advisory panel ranges.
//!
//! All magic numbers are extracted here with:
//! - Units where they exist (seconds, world units, pixels)
//! - Documented ranges and meanings
//! - Single-writer discipline: the panel mutates these, the frame driver
//!   only ever writes the per-frame time value

mod camera;
mod render;
mod waves;

// Re-export all types
pub use camera::CameraOrbit;
pub use render::RenderConfig;
pub use waves::WaveParams;
