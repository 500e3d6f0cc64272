use std::f32::consts::PI;

use glam::Vec4;

use super::{cone_vertex_count, Mesh};

const APEX: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);

/// Point on the unit base circle in the z = 0 plane.
fn eval_circle(u: f32) -> Vec4 {
    Vec4::new(u.cos(), u.sin(), 0.0, 1.0)
}

/// Fan of `slices` flat-shaded triangles from the apex over the base circle.
/// The last triangle wraps back to slice 0, closing the fan.
pub fn generate_cone(slices: u32) -> Mesh {
    let mut mesh = Mesh::with_capacity(cone_vertex_count(slices));
    let rad = 2.0 * PI / slices as f32;

    for i in 0..slices {
        let p1 = eval_circle(i as f32 * rad);
        let p2 = eval_circle(((i + 1) % slices) as f32 * rad);

        let u = (p1 - APEX).truncate();
        let v = (p2 - p1).truncate();
        let normal = u.cross(v).normalize();

        mesh.push(APEX, normal);
        mesh.push(p1, normal);
        mesh.push(p2, normal);
    }

    mesh
}
