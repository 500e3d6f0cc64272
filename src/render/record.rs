use glam::Mat4;

use crate::mesh::PrimitiveKind;
use crate::scene::Material;
use crate::traits::{DrawMode, MeshRenderer};

/// One recorded submission.
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub kind: PrimitiveKind,
    pub transform: Mat4,
    pub material: Material,
    pub mode: DrawMode,
}

/// `MeshRenderer` that appends every submission to a list. Backs the
/// headless mode and the scene tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl MeshRenderer for RecordingRenderer {
    fn draw_mesh(
        &mut self,
        kind: PrimitiveKind,
        transform: Mat4,
        material: &Material,
        mode: DrawMode,
    ) {
        self.calls.push(DrawCall {
            kind,
            transform,
            material: *material,
            mode,
        });
    }
}
