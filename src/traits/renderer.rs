use glam::Mat4;

use crate::mesh::PrimitiveKind;
use crate::scene::Material;

/// How a submission's vertex stream is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Every three consecutive vertices form one filled triangle.
    Triangles,
    /// Every two consecutive vertices form one line segment (wireframe).
    Lines,
}

/// Capability interface the scene assembler draws through.
///
/// Resolved once at setup and injected into the scene; the assembler never
/// talks to the graphics API directly.
pub trait MeshRenderer {
    fn draw_mesh(
        &mut self,
        kind: PrimitiveKind,
        transform: Mat4,
        material: &Material,
        mode: DrawMode,
    );
}
