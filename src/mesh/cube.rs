use glam::Vec4;

use super::{Mesh, CUBE_VERTEX_COUNT};

/// Corners of a unit cube centered at the origin, sides axis-aligned.
const CORNERS: [Vec4; 8] = [
    Vec4::new(-0.5, -0.5, 0.5, 1.0),
    Vec4::new(-0.5, 0.5, 0.5, 1.0),
    Vec4::new(0.5, 0.5, 0.5, 1.0),
    Vec4::new(0.5, -0.5, 0.5, 1.0),
    Vec4::new(-0.5, -0.5, -0.5, 1.0),
    Vec4::new(-0.5, 0.5, -0.5, 1.0),
    Vec4::new(0.5, 0.5, -0.5, 1.0),
    Vec4::new(0.5, -0.5, -0.5, 1.0),
];

/// Corner indices of the six face quads, wound counter-clockwise so every
/// face normal points outward. Order matters for back-face culling.
const FACES: [[usize; 4]; 6] = [
    [1, 0, 3, 2],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [6, 5, 1, 2],
    [4, 5, 6, 7],
    [5, 4, 0, 1],
];

/// 12 triangles, 36 vertices, one flat normal per face.
pub fn generate_cube() -> Mesh {
    let mut mesh = Mesh::with_capacity(CUBE_VERTEX_COUNT);
    for [a, b, c, d] in FACES {
        quad(&mut mesh, a, b, c, d);
    }
    mesh
}

/// Two triangles `(a,b,c)` and `(a,c,d)` for one face, every vertex carrying
/// the shared face normal.
fn quad(mesh: &mut Mesh, a: usize, b: usize, c: usize, d: usize) {
    let u = (CORNERS[b] - CORNERS[a]).truncate();
    let v = (CORNERS[c] - CORNERS[b]).truncate();
    let normal = u.cross(v).normalize();

    for corner in [a, b, c, a, c, d] {
        mesh.push(CORNERS[corner], normal);
    }
}
