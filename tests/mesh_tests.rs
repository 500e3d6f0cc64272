use glam::{Vec3, Vec4};
use cyclist::mesh::{
    cone_vertex_count, generate_cone, generate_cube, generate_sphere, sphere_vertex_count,
    MeshLibrary, PrimitiveKind, CUBE_VERTEX_COUNT, SPHERE_SLICES, SPHERE_STACKS,
};

const EPSILON: f32 = 1e-5;

fn assert_unit_length(normals: &[Vec3]) {
    for normal in normals {
        assert!(
            (normal.length() - 1.0).abs() < EPSILON,
            "normal {:?} is not unit length",
            normal
        );
    }
}

#[cfg(test)]
mod cube_tests {
    use super::*;

    #[test]
    fn test_cube_vertex_and_normal_counts() {
        let cube = generate_cube();
        assert_eq!(cube.positions.len(), CUBE_VERTEX_COUNT);
        assert_eq!(cube.normals.len(), CUBE_VERTEX_COUNT);
    }

    #[test]
    fn test_cube_normals_are_unit_length() {
        let cube = generate_cube();
        assert_unit_length(&cube.normals);
    }

    #[test]
    fn test_cube_face_triangles_share_one_normal() {
        let cube = generate_cube();
        // Six faces of six vertices each.
        for face in cube.normals.chunks_exact(6) {
            for normal in &face[1..] {
                assert_eq!(*normal, face[0]);
            }
        }
    }

    #[test]
    fn test_cube_normal_set_is_axis_aligned() {
        let cube = generate_cube();
        let face_normals: Vec<Vec3> = cube.normals.chunks_exact(6).map(|f| f[0]).collect();

        let expected = [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
        ];
        for axis in expected {
            assert!(
                face_normals
                    .iter()
                    .any(|n| (*n - axis).length() < EPSILON),
                "no face normal along {:?}",
                axis
            );
        }
    }

    #[test]
    fn test_cube_first_face_emits_known_corner() {
        // The first quad is (1,0,3,2); its first emitted position is
        // corner 1 of the canonical table.
        let cube = generate_cube();
        assert_eq!(cube.positions[0], Vec4::new(-0.5, 0.5, 0.5, 1.0));
    }
}

#[cfg(test)]
mod cone_tests {
    use super::*;

    #[test]
    fn test_cone_vertex_count_at_twenty_slices() {
        let cone = generate_cone(20);
        assert_eq!(cone.positions.len(), 60);
        assert_eq!(cone.normals.len(), 60);
        assert_eq!(cone_vertex_count(20), 60);
    }

    #[test]
    fn test_cone_apex_appears_in_every_triangle() {
        let cone = generate_cone(20);
        let apex = Vec4::new(0.0, 0.0, 1.0, 1.0);
        for triangle in cone.positions.chunks_exact(3) {
            assert!(triangle.contains(&apex));
        }
    }

    #[test]
    fn test_cone_normals_are_unit_length_and_flat() {
        let cone = generate_cone(20);
        assert_unit_length(&cone.normals);
        for triangle in cone.normals.chunks_exact(3) {
            assert_eq!(triangle[0], triangle[1]);
            assert_eq!(triangle[1], triangle[2]);
        }
    }

    #[test]
    fn test_cone_fan_closes_back_to_first_slice() {
        let cone = generate_cone(20);
        // The last triangle's final base point is the slice-0 base point.
        let first_base = cone.positions[1];
        let last = cone.positions.len() - 1;
        assert_eq!(cone.positions[last], first_base);
    }
}

#[cfg(test)]
mod sphere_tests {
    use super::*;

    #[test]
    fn test_sphere_vertex_count_matches_formula() {
        let sphere = generate_sphere(SPHERE_SLICES, SPHERE_STACKS);
        assert_eq!(
            sphere.positions.len(),
            sphere_vertex_count(SPHERE_SLICES, SPHERE_STACKS)
        );
        assert_eq!(sphere.normals.len(), sphere.positions.len());
        assert_eq!(sphere_vertex_count(20, 20), 2280);
    }

    #[test]
    fn test_sphere_normals_are_unit_length() {
        let sphere = generate_sphere(20, 20);
        assert_unit_length(&sphere.normals);
    }

    #[test]
    fn test_sphere_top_cap_normals_are_radial() {
        let sphere = generate_sphere(20, 20);
        let cap = 3 * 20;
        for i in 0..cap {
            let radial = sphere.positions[i].truncate().normalize();
            assert!(
                (sphere.normals[i] - radial).length() < EPSILON,
                "top-cap normal at {} is not radial",
                i
            );
        }
    }

    #[test]
    fn test_sphere_middle_band_normals_are_radial() {
        let sphere = generate_sphere(20, 20);
        let cap = 3 * 20;
        for i in cap..sphere.positions.len() - cap {
            let radial = sphere.positions[i].truncate().normalize();
            assert!((sphere.normals[i] - radial).length() < EPSILON);
        }
    }

    #[test]
    fn test_sphere_bottom_cap_normals_are_flat_not_radial() {
        let sphere = generate_sphere(20, 20);
        let cap = 3 * 20;
        let bottom = &sphere.normals[sphere.normals.len() - cap..];
        let bottom_positions = &sphere.positions[sphere.positions.len() - cap..];

        // Flat: all three vertices of a bottom-cap triangle share a normal.
        for triangle in bottom.chunks_exact(3) {
            assert_eq!(triangle[0], triangle[1]);
            assert_eq!(triangle[1], triangle[2]);
        }

        // And that shared normal is not the radial one. The asymmetry with
        // the smooth top cap is part of the generator's contract.
        let mut differs = 0;
        for (normal, position) in bottom.iter().zip(bottom_positions) {
            let radial = position.truncate().normalize();
            if (*normal - radial).length() > 1e-3 {
                differs += 1;
            }
        }
        assert!(differs > 0, "bottom cap unexpectedly matches radial normals");
    }
}

#[cfg(test)]
mod library_tests {
    use super::*;

    #[test]
    fn test_library_generates_all_three_primitives() {
        let library = MeshLibrary::generate();
        assert_eq!(library.get(PrimitiveKind::Cube).vertex_count(), 36);
        assert_eq!(library.get(PrimitiveKind::Cone).vertex_count(), 60);
        assert_eq!(library.get(PrimitiveKind::Sphere).vertex_count(), 2280);
    }

    #[test]
    fn test_library_buffers_resize_with_parameters() {
        let library = MeshLibrary::with_params(8, 12, 6);
        assert_eq!(library.cone.vertex_count(), cone_vertex_count(8));
        assert_eq!(library.sphere.vertex_count(), sphere_vertex_count(12, 6));
    }
}
