//! Procedural chair and floor geometry. Each vertex carries the slot of the
//! color it is shaded with: the three chair parts plus the floor.

use crate::catalog::ChairPart;
use crate::constants::{FLOOR_HALF_EXTENT, FLOOR_Y};
use glam::{Mat4, Quat, Vec3};

pub const FLOOR_SLOT: u32 = 3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub slot: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Appends an axis-aligned unit box transformed by `xf` (scale encodes
    /// the half extents).
    pub fn push_box(&mut self, xf: Mat4, slot: u32) {
        // +X, -X, +Y, -Y, +Z, -Z
        const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]),
            ([-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]),
            ([0.0, -1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
            ([0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
            ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]),
        ];
        let normal_xf = xf.inverse().transpose();
        for (n, up, right) in FACES {
            let (n, up, right) = (Vec3::from(n), Vec3::from(up), Vec3::from(right));
            let normal = normal_xf.transform_vector3(n).normalize_or_zero();
            let base = self.vertices.len() as u16;
            for (su, sr) in [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)] {
                let local = n + up * su + right * sr;
                self.vertices.push(Vertex {
                    position: xf.transform_point3(local).to_array(),
                    normal: normal.to_array(),
                    slot,
                });
            }
            self.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

fn block(center: Vec3, half: Vec3, rotation: Quat) -> Mat4 {
    Mat4::from_scale_rotation_translation(half, rotation, center)
}

/// Office-style chair: seat cushion, tilted backrest, gas column and a
/// five-star base with casters. Origin sits at the seat.
pub fn chair_mesh() -> Mesh {
    let mut mesh = Mesh::default();
    let seat = ChairPart::Seat.index() as u32;
    let back = ChairPart::Backrest.index() as u32;
    let base = ChairPart::Base.index() as u32;

    mesh.push_box(
        block(Vec3::ZERO, Vec3::new(0.3, 0.06, 0.3), Quat::IDENTITY),
        seat,
    );
    mesh.push_box(
        block(
            Vec3::new(0.0, 0.5, -0.3),
            Vec3::new(0.28, 0.42, 0.05),
            Quat::from_rotation_x(-0.12),
        ),
        back,
    );
    // headrest pad
    mesh.push_box(
        block(
            Vec3::new(0.0, 0.98, -0.36),
            Vec3::new(0.16, 0.07, 0.06),
            Quat::from_rotation_x(-0.12),
        ),
        back,
    );

    mesh.push_box(
        block(
            Vec3::new(0.0, -0.28, 0.0),
            Vec3::new(0.04, 0.2, 0.04),
            Quat::IDENTITY,
        ),
        base,
    );
    let leg_y = FLOOR_Y + 0.11;
    for k in 0..5 {
        let rot = Quat::from_rotation_y(k as f32 * std::f32::consts::TAU / 5.0);
        let dir = rot * Vec3::X;
        mesh.push_box(
            block(
                dir * 0.17 + Vec3::Y * leg_y,
                Vec3::new(0.17, 0.025, 0.035),
                rot,
            ),
            base,
        );
        // caster
        mesh.push_box(
            block(
                dir * 0.32 + Vec3::Y * (FLOOR_Y + 0.04),
                Vec3::splat(0.04),
                rot,
            ),
            base,
        );
    }
    mesh
}

/// Square floor plane at [`FLOOR_Y`].
pub fn floor_mesh() -> Mesh {
    let mut mesh = Mesh::default();
    let h = FLOOR_HALF_EXTENT;
    let normal = [0.0, 1.0, 0.0];
    for (x, z) in [(-h, -h), (-h, h), (h, h), (h, -h)] {
        mesh.vertices.push(Vertex {
            position: [x, FLOOR_Y, z],
            normal,
            slot: FLOOR_SLOT,
        });
    }
    mesh.indices.extend_from_slice(&[0, 1, 2, 0, 2, 3]);
    mesh
}
