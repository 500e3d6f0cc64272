use std::f32::consts::PI;

use glam::{Vec3, Vec4};

use super::{sphere_vertex_count, Mesh};

const NORTH_POLE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);
const SOUTH_POLE: Vec4 = Vec4::new(0.0, 0.0, -1.0, 1.0);

/// Point on the unit sphere; `u` runs around the Z axis, `v` along it.
fn eval_sphere(u: f32, v: f32) -> Vec4 {
    Vec4::new(u.cos() * v.sin(), u.sin() * v.sin(), v.cos(), 1.0)
}

/// Outward radial normal for smooth shading.
fn radial(p: Vec4) -> Vec3 {
    p.truncate().normalize()
}

/// Subdivided around the Z axis into `slices` and along it into `stacks`.
///
/// The polar caps are triangle fans. The top cap and the middle band carry
/// smooth per-vertex radial normals; the bottom cap carries flat
/// cross-product normals like the cone. The asymmetry between the two caps
/// is part of the mesh's contract and is kept as is. The `v` step covers a
/// full turn (`2*PI / stacks`), also kept as is.
pub fn generate_sphere(slices: u32, stacks: u32) -> Mesh {
    let mut mesh = Mesh::with_capacity(sphere_vertex_count(slices, stacks));
    let u_rad = 2.0 * PI / slices as f32;
    let v_rad = 2.0 * PI / stacks as f32;

    // Top cap: fan from the north pole over the first ring.
    for i in 0..slices {
        let p1 = eval_sphere(i as f32 * u_rad, v_rad);
        let p2 = eval_sphere(((i + 1) % slices) as f32 * u_rad, v_rad);

        mesh.push(NORTH_POLE, radial(NORTH_POLE));
        mesh.push(p1, radial(p1));
        mesh.push(p2, radial(p2));
    }

    // Middle stacks: each slice/stack cell is a quad split into the
    // triangles (p1,p2,p3) and (p1,p3,p4). Wraps at the seam slice.
    for j in 1..=stacks - 2 {
        for i in 0..slices {
            let u0 = i as f32 * u_rad;
            let u1 = ((i + 1) % slices) as f32 * u_rad;
            let v0 = j as f32 * v_rad;
            let v1 = (j + 1) as f32 * v_rad;

            let p1 = eval_sphere(u0, v0);
            let p2 = eval_sphere(u0, v1);
            let p3 = eval_sphere(u1, v1);
            let p4 = eval_sphere(u1, v0);

            for p in [p1, p2, p3, p1, p3, p4] {
                mesh.push(p, radial(p));
            }
        }
    }

    // Bottom cap: fan from the south pole over the last ring, with flat
    // per-triangle normals, unlike the smooth top cap.
    let ring = (stacks - 1) as f32 * v_rad;
    for i in 0..slices {
        let p2 = eval_sphere(i as f32 * u_rad, ring);
        let p1 = eval_sphere(((i + 1) % slices) as f32 * u_rad, ring);

        let u = (p1 - SOUTH_POLE).truncate();
        let v = (p2 - p1).truncate();
        let normal = u.cross(v).normalize();

        mesh.push(SOUTH_POLE, normal);
        mesh.push(p1, normal);
        mesh.push(p2, normal);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_matches_formula() {
        let mesh = generate_sphere(20, 20);
        assert_eq!(mesh.vertex_count(), sphere_vertex_count(20, 20));
        assert_eq!(mesh.normals.len(), mesh.positions.len());
    }

    #[test]
    fn count_formula_for_default_parameters() {
        assert_eq!(sphere_vertex_count(20, 20), 2280);
    }
}
