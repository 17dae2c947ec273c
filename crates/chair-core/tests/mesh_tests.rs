// Host-side tests for the procedural chair geometry.

use chair_core::*;
use glam::{Mat4, Vec3};

#[test]
fn unit_box_has_outward_facing_triangles() {
    let mut mesh = Mesh::default();
    mesh.push_box(Mat4::IDENTITY, 0);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] =
            [tri[0], tri[1], tri[2]].map(|i| Vec3::from(mesh.vertices[i as usize].position));
        let n = Vec3::from(mesh.vertices[tri[0] as usize].normal);
        let face = (b - a).cross(c - a).normalize();
        assert!((face - n).length() < 1e-5, "winding disagrees with normal {n:?}");
        assert!(a.dot(n) > 0.0, "normal should point away from the center");
    }
}

#[test]
fn box_transform_scales_extents() {
    let mut mesh = Mesh::default();
    mesh.push_box(
        Mat4::from_scale_rotation_translation(
            Vec3::new(2.0, 0.5, 1.0),
            glam::Quat::IDENTITY,
            Vec3::new(0.0, 3.0, 0.0),
        ),
        1,
    );
    let (min, max) = bounds(&mesh);
    assert!((min - Vec3::new(-2.0, 2.5, -1.0)).length() < 1e-5);
    assert!((max - Vec3::new(2.0, 3.5, 1.0)).length() < 1e-5);
    assert!(mesh.vertices.iter().all(|v| v.slot == 1));
}

#[test]
fn chair_uses_every_part_slot_and_stays_above_the_floor() {
    let chair = chair_mesh();
    for part in ChairPart::ALL {
        assert!(
            chair.vertices.iter().any(|v| v.slot == part.index() as u32),
            "{part:?} missing"
        );
    }
    assert!(chair.vertices.iter().all(|v| v.slot != FLOOR_SLOT));
    let (min, max) = bounds(&chair);
    assert!(min.y >= FLOOR_Y - 1e-4);
    assert!(max.y > 0.9, "backrest should rise above the seat");
    assert!(chair.indices.iter().all(|i| (*i as usize) < chair.vertices.len()));
}

#[test]
fn floor_is_a_single_upward_quad() {
    let floor = floor_mesh();
    assert_eq!(floor.triangle_count(), 2);
    assert!(floor
        .vertices
        .iter()
        .all(|v| v.slot == FLOOR_SLOT && v.position[1] == FLOOR_Y && v.normal == [0.0, 1.0, 0.0]));
}

#[test]
fn vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 28);
    let mesh = chair_mesh();
    let bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
    assert_eq!(bytes.len() % 28, 0);
}

fn bounds(mesh: &Mesh) -> (Vec3, Vec3) {
    mesh.vertices.iter().fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(lo, hi), v| {
            let p = Vec3::from(v.position);
            (lo.min(p), hi.max(p))
        },
    )
}
