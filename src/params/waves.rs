//! Wave shading parameters shared between the debug panel and the shader.

/// Named shading parameters consumed by the ocean shader pair.
///
/// Every field maps 1:1 to a uniform and to a panel control. The panel ranges
/// noted below are advisory only; the shading math is total over all reals.
#[derive(Debug, Clone)]
pub struct WaveParams {
    /// Primary wave amplitude in world units (panel: 0..1)
    pub wave_length: f32,

    /// Primary wave spatial frequency along X and Z (panel: 0..10 each)
    pub frequency: [f32; 2],

    /// Primary wave phase speed, radians per second (panel: 0..4)
    pub wave_speed: f32,

    /// Color of wave troughs, linear RGB (panel: color picker)
    pub depth_color: [f32; 3],

    /// Color of wave crests, linear RGB (panel: color picker)
    pub surface_color: [f32; 3],

    /// Elevation bias applied before the color mix (panel: 0..1)
    pub color_offset: f32,

    /// Elevation gain applied before the color mix (panel: 0..10)
    pub color_multiplier: f32,

    /// Small-wave perturbation amplitude in world units (panel: 0..1)
    pub small_wave_elevation: f32,

    /// Small-wave noise spatial frequency (panel: 0..30)
    pub small_wave_frequency: f32,

    /// Small-wave noise scroll speed through time (panel: 0..1)
    pub small_wave_speed: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_length: 0.17,
            frequency: [5.0, 3.6],
            wave_speed: 0.7,
            depth_color: hex_rgb(0x2d8eae),
            surface_color: hex_rgb(0xd1edff),
            color_offset: 0.03,
            color_multiplier: 7.0,
            small_wave_elevation: 0.1,
            small_wave_frequency: 3.0,
            small_wave_speed: 0.2,
        }
    }
}

/// Convert a 24-bit hex color to normalized RGB components
fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_rgb_channels() {
        assert_eq!(hex_rgb(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_rgb(0x00ff00), [0.0, 1.0, 0.0]);
        assert_eq!(hex_rgb(0x0000ff), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_default_colors_match_documented_palette() {
        let params = WaveParams::default();
        // #2d8eae and #d1edff
        assert!((params.depth_color[0] - 45.0 / 255.0).abs() < 1e-6);
        assert!((params.depth_color[1] - 142.0 / 255.0).abs() < 1e-6);
        assert!((params.depth_color[2] - 174.0 / 255.0).abs() < 1e-6);
        assert!((params.surface_color[0] - 209.0 / 255.0).abs() < 1e-6);
        assert!((params.surface_color[1] - 237.0 / 255.0).abs() < 1e-6);
        assert!((params.surface_color[2] - 255.0 / 255.0).abs() < 1e-6);
    }
}
