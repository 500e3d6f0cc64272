mod cone;
mod cube;
mod sphere;

pub use cone::generate_cone;
pub use cube::generate_cube;
pub use sphere::generate_sphere;

use glam::{Vec3, Vec4};

/// Default tessellation parameters, fixed at startup.
pub const CONE_SLICES: u32 = 20;
pub const SPHERE_SLICES: u32 = 20;
pub const SPHERE_STACKS: u32 = 20;

/// The three primitive shapes every drawable references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Cube,
    Cone,
    Sphere,
}

/// Flat, non-indexed triangle list for one primitive.
///
/// `positions[i]` pairs with `normals[i]`; every three consecutive vertices
/// form one triangle. Generated once, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub positions: Vec<Vec4>,
    pub normals: Vec<Vec3>,
}

impl Mesh {
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
        }
    }

    pub(crate) fn push(&mut self, position: Vec4, normal: Vec3) {
        self.positions.push(position);
        self.normals.push(normal);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// 6 faces, 2 triangles each.
pub const CUBE_VERTEX_COUNT: usize = 36;

/// One fan triangle per slice.
pub const fn cone_vertex_count(slices: u32) -> usize {
    3 * slices as usize
}

/// Two polar cap fans plus two triangles per middle quad cell.
pub const fn sphere_vertex_count(slices: u32, stacks: u32) -> usize {
    let s = slices as usize;
    let t = stacks as usize;
    3 * (2 * s + 2 * s * (t - 2))
}

/// All three meshes, generated once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct MeshLibrary {
    pub cube: Mesh,
    pub cone: Mesh,
    pub sphere: Mesh,
}

impl MeshLibrary {
    pub fn generate() -> Self {
        Self::with_params(CONE_SLICES, SPHERE_SLICES, SPHERE_STACKS)
    }

    /// Buffers are sized from the parameters, so regenerating with different
    /// slice/stack counts resizes the backing storage automatically.
    pub fn with_params(cone_slices: u32, sphere_slices: u32, sphere_stacks: u32) -> Self {
        Self {
            cube: generate_cube(),
            cone: generate_cone(cone_slices),
            sphere: generate_sphere(sphere_slices, sphere_stacks),
        }
    }

    pub fn get(&self, kind: PrimitiveKind) -> &Mesh {
        match kind {
            PrimitiveKind::Cube => &self.cube,
            PrimitiveKind::Cone => &self.cone,
            PrimitiveKind::Sphere => &self.sphere,
        }
    }
}
