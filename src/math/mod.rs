pub mod transform;

pub use transform::TransformStack;

use glam::Mat4;

/// Orthographic view volume the scene is framed in. The bounds are fixed;
/// window aspect does not enter the projection.
pub const ORTHO_HALF_EXTENT: f32 = 6.0;
pub const NEAR_PLANE: f32 = 0.5;
pub const FAR_PLANE: f32 = 3.0;

/// Projection matrix for the fixed view volume.
pub fn fixed_projection() -> Mat4 {
    Mat4::orthographic_rh(
        -ORTHO_HALF_EXTENT,
        ORTHO_HALF_EXTENT,
        -ORTHO_HALF_EXTENT,
        ORTHO_HALF_EXTENT,
        NEAR_PLANE,
        FAR_PLANE,
    )
}
