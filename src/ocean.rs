//! Ocean plane mesh and the wave shading math.
//!
//! The displacement and coloring run on the GPU (see `shader.wgsl`); this
//! module generates the static grid and mirrors the shader math as pure Rust
//! functions so the wave model can be exercised off-GPU.

use bytemuck::{Pod, Zeroable};
use noise::{NoiseFn, Perlin};

use crate::params::WaveParams;

/// Plane extent in world units (the grid spans -5..+5 on X and Z)
pub const PLANE_SIZE: f32 = 10.0;

/// Subdivisions per side. Even, so the grid has an exact center vertex.
pub const GRID_SUBDIVISIONS: usize = 512;

/// Number of noise octaves layered into the small-wave perturbation
const SMALL_WAVE_OCTAVES: u32 = 3;

/// Vertex data for the ocean mesh (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Static ocean grid: a flat XZ plane, built once and never mutated.
/// Vertex displacement happens in the vertex shader.
pub struct OceanMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl OceanMesh {
    /// Generate the flat grid with `subdivisions` cells per side
    pub fn new(subdivisions: usize) -> Self {
        let spacing = PLANE_SIZE / subdivisions as f32;
        let half_size = PLANE_SIZE / 2.0;

        let mut vertices = Vec::with_capacity((subdivisions + 1).pow(2));
        let mut indices = Vec::with_capacity(subdivisions.pow(2) * 6);

        for z in 0..=subdivisions {
            for x in 0..=subdivisions {
                let x_pos = x as f32 * spacing - half_size;
                let z_pos = z as f32 * spacing - half_size;

                vertices.push(Vertex {
                    position: [x_pos, 0.0, z_pos],
                    uv: [
                        x as f32 / subdivisions as f32,
                        z as f32 / subdivisions as f32,
                    ],
                });
            }
        }

        // Triangle indices, counter-clockwise winding
        for z in 0..subdivisions {
            for x in 0..subdivisions {
                let top_left = (z * (subdivisions + 1) + x) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((z + 1) * (subdivisions + 1) + x) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        Self { vertices, indices }
    }
}

/// Primary wave elevation at plane position `(x, z)` and time `t`.
///
/// Two crossed sinusoids sharing a phase speed, scaled by the wave length.
pub fn primary_elevation(x: f32, z: f32, time_s: f32, params: &WaveParams) -> f32 {
    (x * params.frequency[0] + time_s * params.wave_speed).sin()
        * (z * params.frequency[1] + time_s * params.wave_speed).sin()
        * params.wave_length
}

/// Small-wave perturbation: layered Perlin noise scrolled through time.
///
/// Each octave `i` samples at `i` times the base frequency and subtracts
/// `|noise| / i`, carving sharp troughs into the primary swell.
pub fn small_wave_elevation(
    x: f32,
    z: f32,
    time_s: f32,
    params: &WaveParams,
    perlin: &Perlin,
) -> f32 {
    let mut elevation = 0.0;
    for i in 1..=SMALL_WAVE_OCTAVES {
        let octave = i as f32;
        let noise = perlin.get([
            (x * params.small_wave_frequency * octave) as f64,
            (z * params.small_wave_frequency * octave) as f64,
            (time_s * params.small_wave_speed) as f64,
        ]) as f32;
        elevation -= noise.abs() * params.small_wave_elevation / octave;
    }
    elevation
}

/// Combined wave elevation (primary swell + small-wave perturbation)
pub fn wave_elevation(x: f32, z: f32, time_s: f32, params: &WaveParams, perlin: &Perlin) -> f32 {
    primary_elevation(x, z, time_s, params) + small_wave_elevation(x, z, time_s, params, perlin)
}

/// Interpolation factor for the depth/surface color mix, clamped to [0, 1]
pub fn color_mix_factor(elevation: f32, params: &WaveParams) -> f32 {
    ((elevation + params.color_offset) * params.color_multiplier).clamp(0.0, 1.0)
}

/// Fragment color: linear mix of depth color toward surface color
pub fn surface_color(elevation: f32, params: &WaveParams) -> [f32; 3] {
    let factor = color_mix_factor(elevation, params);
    let depth = params.depth_color;
    let surface = params.surface_color;
    // Two-product form so a saturated factor reproduces an endpoint exactly
    [
        depth[0] * (1.0 - factor) + surface[0] * factor,
        depth[1] * (1.0 - factor) + surface[1] * factor,
        depth[2] * (1.0 - factor) + surface[2] * factor,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_vertex_and_index_counts() {
        let mesh = OceanMesh::new(32);

        // (n + 1)^2 vertices, n^2 quads * 2 triangles * 3 indices
        assert_eq!(mesh.vertices.len(), 33 * 33);
        assert_eq!(mesh.indices.len(), 32 * 32 * 6);
    }

    #[test]
    fn test_mesh_has_center_vertex_at_origin() {
        let mesh = OceanMesh::new(GRID_SUBDIVISIONS);

        let center = mesh
            .vertices
            .iter()
            .find(|v| v.position[0] == 0.0 && v.position[2] == 0.0);
        assert!(center.is_some(), "even subdivision must place a vertex at the origin");
    }

    #[test]
    fn test_mesh_spans_plane_extent() {
        let mesh = OceanMesh::new(8);
        let half = PLANE_SIZE / 2.0;

        for v in &mesh.vertices {
            assert!(v.position[0] >= -half && v.position[0] <= half);
            assert!(v.position[2] >= -half && v.position[2] <= half);
            assert_eq!(v.position[1], 0.0);
        }
    }

    #[test]
    fn test_primary_elevation_zero_at_origin_t0() {
        // sin(0) = 0 regardless of frequency, speed, or amplitude
        let params = WaveParams::default();
        assert_eq!(primary_elevation(0.0, 0.0, 0.0, &params), 0.0);
    }

    #[test]
    fn test_wave_elevation_is_idempotent() {
        let params = WaveParams::default();
        let perlin = Perlin::new(0);

        for i in 0..50 {
            let x = i as f32 * 0.13 - 3.0;
            let z = i as f32 * 0.29 - 2.0;
            let t = i as f32 * 0.41;

            let a = wave_elevation(x, z, t, &params, &perlin);
            let b = wave_elevation(x, z, t, &params, &perlin);
            assert_eq!(a.to_bits(), b.to_bits(), "elevation not pure at ({x}, {z}, {t})");
        }
    }

    #[test]
    fn test_small_waves_only_subtract() {
        let params = WaveParams::default();
        let perlin = Perlin::new(0);

        for i in 0..50 {
            let x = i as f32 * 0.17;
            let z = i as f32 * 0.07;
            let e = small_wave_elevation(x, z, 1.5, &params, &perlin);
            assert!(e <= 0.0, "perturbation must carve troughs, got {e}");
        }
    }

    #[test]
    fn test_color_mix_factor_clamps() {
        let mut params = WaveParams::default();
        params.color_offset = 0.0;
        params.color_multiplier = 1.0;

        assert_eq!(color_mix_factor(1.5, &params), 1.0);
        assert_eq!(color_mix_factor(-0.5, &params), 0.0);
        assert_eq!(color_mix_factor(0.25, &params), 0.25);
    }

    #[test]
    fn test_saturated_mix_returns_exact_endpoint_colors() {
        let mut params = WaveParams::default();
        params.color_offset = 0.0;
        params.color_multiplier = 1.0;

        // Raw factor 1.5 clamps to 1 -> exactly the surface color
        assert_eq!(surface_color(1.5, &params), params.surface_color);
        // Raw factor -0.5 clamps to 0 -> exactly the depth color
        assert_eq!(surface_color(-0.5, &params), params.depth_color);
    }
}
