//! Rendering and mesh configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 75.0,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }

    /// Record a new output surface size (resize event)
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_tracks_resize_exactly() {
        let mut config = RenderConfig::default();

        config.set_size(800, 600);
        assert_eq!(config.aspect_ratio(), 800.0 / 600.0);

        config.set_size(1920, 1080);
        assert_eq!(config.aspect_ratio(), 1920.0 / 1080.0);
    }

    #[test]
    fn test_repeated_resize_does_not_drift() {
        let mut config = RenderConfig::default();

        config.set_size(800, 600);
        let first = config.aspect_ratio();
        for _ in 0..100 {
            config.set_size(800, 600);
        }
        assert_eq!(config.aspect_ratio(), first);
    }
}
