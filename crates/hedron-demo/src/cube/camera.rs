//! Fixed viewpoint and projection for the cube.
//!
//! The camera never moves: eye at (2, 2, 2) looking at the origin with +z
//! up, a 60 degree vertical field of view, clip range 0.01..100, depth
//! mapped to wgpu's [0, 1] clip space.

use ultraviolet::{Mat4, Vec3};

/// Vertical field of view in degrees.
const FOV_Y_DEG: f32 = 60.0;

/// Near clip distance.
const Z_NEAR: f32 = 0.01;

/// Far clip distance.
const Z_FAR: f32 = 100.0;

/// Projection aspect ratio.
///
/// Deliberately the 4:3 of the 640x480 design size, not the live
/// width/height: resizing the window to another aspect stretches the image
/// instead of re-framing it. Replacing this with `width / height` changes
/// every rendered frame; the `projection_aspect_is_locked_to_four_thirds`
/// test pins the current behavior.
const ASPECT: f32 = 4.0 / 3.0;

const EYE: [f32; 3] = [2.0, 2.0, 2.0];
const TARGET: [f32; 3] = [0.0, 0.0, 0.0];
const UP: [f32; 3] = [0.0, 0.0, 1.0];

/// Perspective projection with depth mapped to [0, 1].
pub fn projection() -> Mat4 {
    ultraviolet::projection::perspective_wgpu_dx(FOV_Y_DEG.to_radians(), ASPECT, Z_NEAR, Z_FAR)
}

/// View matrix for the fixed eye/target/up triple.
pub fn view() -> Mat4 {
    Mat4::look_at(Vec3::from(EYE), Vec3::from(TARGET), Vec3::from(UP))
}

/// Combined projection * view matrix.
///
/// Pure: every call produces a bit-identical matrix, so re-uploading it on
/// each resize is idempotent.
pub fn view_projection() -> Mat4 {
    projection() * view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultraviolet::Vec4;

    fn forward() -> Vec3 {
        (Vec3::from(TARGET) - Vec3::from(EYE)).normalized()
    }

    /// NDC depth of a world point, after the perspective divide.
    fn ndc_depth(m: Mat4, p: Vec3) -> f32 {
        let clip = m * Vec4::new(p.x, p.y, p.z, 1.0);
        clip.z / clip.w
    }

    // ── purity ────────────────────────────────────────────────────────────

    #[test]
    fn recomputation_is_bit_identical() {
        let a: [[f32; 4]; 4] = view_projection().into();
        let b: [[f32; 4]; 4] = view_projection().into();
        assert_eq!(a, b);
    }

    #[test]
    fn projection_aspect_is_locked_to_four_thirds() {
        // Column-major perspective: [1][1] is the y scale and [0][0] is the
        // y scale divided by the aspect ratio.
        let p: [[f32; 4]; 4] = projection().into();
        let aspect = p[1][1] / p[0][0];
        assert!((aspect - 4.0 / 3.0).abs() < 1e-5);
    }

    // ── clip range ────────────────────────────────────────────────────────

    #[test]
    fn near_plane_maps_to_depth_zero() {
        let m = view_projection();
        let p = Vec3::from(EYE) + forward() * Z_NEAR;
        assert!(ndc_depth(m, p).abs() < 1e-3);
    }

    #[test]
    fn far_plane_maps_to_depth_one() {
        let m = view_projection();
        let p = Vec3::from(EYE) + forward() * Z_FAR;
        assert!((ndc_depth(m, p) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn cube_center_sits_inside_the_clip_range() {
        let m = view_projection();
        let d = ndc_depth(m, Vec3::from(TARGET));
        assert!(d > 0.0 && d < 1.0);
    }
}
