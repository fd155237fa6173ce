//! Orbiting camera with a parameterized sinusoidal path.

use glam::{Mat4, Vec3};

use crate::params::{CameraOrbit, RenderConfig};

/// Camera pose for one frame: where the camera sits and what it faces.
///
/// Fully derived from elapsed time; recomputed every frame and consumed
/// immediately by the render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Camera system tracing an elliptical orbit around the ocean plane
pub struct CameraSystem {
    orbit: CameraOrbit,
}

impl CameraSystem {
    /// Create new camera system with the given orbit parameters
    pub fn new(orbit: CameraOrbit) -> Self {
        Self { orbit }
    }

    pub fn orbit(&self) -> &CameraOrbit {
        &self.orbit
    }

    pub fn orbit_mut(&mut self) -> &mut CameraOrbit {
        &mut self.orbit
    }

    /// Compute camera position and look-at target for given time
    ///
    /// # Arguments
    /// * `time_s` - Current time in seconds
    ///
    /// Pure over all real inputs; the Y position stays at the configured
    /// height and is never advanced by time.
    pub fn compute_pose(&self, time_s: f32) -> CameraPose {
        let p = &self.orbit;

        let position = Vec3::new(
            (time_s * p.round_speed_x).sin() * p.distance_x,
            p.height,
            (time_s * p.round_speed_z).cos() * p.distance_z,
        );

        let look_at = Vec3::new(
            (time_s * p.look_at_speed[0]).cos() * p.look_at_move[0],
            (time_s * p.look_at_speed[1]).sin() * p.look_at_move[1],
            (time_s * p.look_at_speed[2]).sin() * p.look_at_move[2],
        );

        CameraPose { position, look_at }
    }

    /// Create view-projection matrix for rendering
    ///
    /// # Arguments
    /// * `time_s` - Current time in seconds
    /// * `render_config` - Rendering configuration (FOV, aspect ratio, etc.)
    ///
    /// # Returns
    /// Tuple of (view_proj_matrix, camera_position)
    pub fn create_view_proj_matrix(
        &self,
        time_s: f32,
        render_config: &RenderConfig,
    ) -> (Mat4, Vec3) {
        let pose = self.compute_pose(time_s);

        // The camera never rolls; Y stays up
        let up = Vec3::Y;

        let view = Mat4::look_at_rh(pose.position, pose.look_at, up);
        let proj = Mat4::perspective_rh(
            render_config.fov_degrees.to_radians(),
            render_config.aspect_ratio(),
            render_config.near_plane,
            render_config.far_plane,
        );

        (proj * view, pose.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_at_t0() {
        let orbit = CameraOrbit::default();
        let camera = CameraSystem::new(orbit.clone());
        let pose = camera.compute_pose(0.0);

        // sin(0) = 0, cos(0) = 1
        assert_eq!(pose.position.x, 0.0);
        assert_eq!(pose.position.y, orbit.height);
        assert_eq!(pose.position.z, orbit.distance_z);

        assert_eq!(pose.look_at.x, orbit.look_at_move[0]);
        assert_eq!(pose.look_at.y, 0.0);
        assert_eq!(pose.look_at.z, 0.0);
    }

    #[test]
    fn test_orbit_traces_ellipse() {
        let camera = CameraSystem::new(CameraOrbit::default());
        let p = camera.orbit().clone();

        // With equal round speeds, x²/dx² + z²/dz² = sin² + cos² = 1
        for i in 0..200 {
            let t = i as f32 * 0.37;
            let pose = camera.compute_pose(t);
            let ellipse = pose.position.x.powi(2) / p.distance_x.powi(2)
                + pose.position.z.powi(2) / p.distance_z.powi(2);
            assert!(
                (ellipse - 1.0).abs() < 1e-5,
                "orbit left the ellipse at t={}: {}",
                t,
                ellipse
            );
        }
    }

    #[test]
    fn test_fixed_height_never_varies() {
        let camera = CameraSystem::new(CameraOrbit::default());
        let height = camera.orbit().height;

        for i in 0..100 {
            let pose = camera.compute_pose(i as f32 * 1.7);
            assert_eq!(pose.position.y, height);
        }
    }

    #[test]
    fn test_view_proj_matrix_generation() {
        let camera = CameraSystem::new(CameraOrbit::default());
        let render_config = RenderConfig::default();

        let (view_proj, eye_pos) = camera.create_view_proj_matrix(0.0, &render_config);

        // Matrix should not be identity or zero
        assert_ne!(view_proj, Mat4::IDENTITY);
        assert_ne!(view_proj, Mat4::ZERO);

        // Eye position should be valid (not NaN or infinite)
        assert!(eye_pos.x.is_finite());
        assert!(eye_pos.y.is_finite());
        assert!(eye_pos.z.is_finite());
    }
}
