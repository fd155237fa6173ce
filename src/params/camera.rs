//! Camera orbit configuration.

/// Parameters for the orbiting camera path.
///
/// The camera circles the ocean plane on an ellipse in XZ while its look-at
/// target drifts on three independent sinusoids.
#[derive(Debug, Clone)]
pub struct CameraOrbit {
    /// Orbit radius along X (world units, panel: 0..8)
    pub distance_x: f32,

    /// Orbit radius along Z (world units, panel: 0..8)
    pub distance_z: f32,

    /// Orbit angular speed for the X phase (radians per second, panel: 0..0.5)
    pub round_speed_x: f32,

    /// Orbit angular speed for the Z phase (radians per second, panel: 0..0.5)
    pub round_speed_z: f32,

    /// Look-at drift amplitude per axis (world units, panel: 0..1 each)
    pub look_at_move: [f32; 3],

    /// Look-at drift speed per axis (radians per second, panel: 0..1 each)
    pub look_at_speed: [f32; 3],

    /// Camera height above the plane (world units). Fixed at startup and
    /// never advanced by the motion function.
    pub height: f32,
}

impl Default for CameraOrbit {
    fn default() -> Self {
        Self {
            distance_x: 3.6,
            distance_z: 3.6,
            round_speed_x: 0.1,
            round_speed_z: 0.1,
            look_at_move: [0.3, 0.3, 0.3],
            look_at_speed: [0.3, 0.3, 0.3],
            height: 0.23,
        }
    }
}
