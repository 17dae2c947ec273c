//! Camera description plus the rig that flies between named viewpoints and
//! orbits around the target under user drag/wheel input.

use crate::catalog::{View, Viewpoint};
use crate::constants::{
    CAMERA_FOV_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR, ORBIT_DAMPING, ORBIT_MAX_DISTANCE,
    ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE, ORBIT_ZOOM_STEP, VIEW_TWEEN_SEC,
};
use crate::easing::Ease;
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

const MIN_POLAR: f32 = 1e-4;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[derive(Clone, Copy, Debug)]
struct FlyTo {
    from_eye: Vec3,
    from_target: Vec3,
    to: Viewpoint,
    start_sec: f32,
}

/// Orbit camera around a target. Positions are kept in spherical form
/// relative to the target: `polar` from +Y, `azimuth` around Y from +Z.
#[derive(Clone, Debug)]
pub struct CameraRig {
    target: Vec3,
    radius: f32,
    polar: f32,
    azimuth: f32,
    delta_polar: f32,
    delta_azimuth: f32,
    fly: Option<FlyTo>,
}

impl CameraRig {
    pub fn new(view: View) -> Self {
        let vp = view.viewpoint();
        let mut rig = Self {
            target: vp.target,
            radius: 0.0,
            polar: 0.0,
            azimuth: 0.0,
            delta_polar: 0.0,
            delta_azimuth: 0.0,
            fly: None,
        };
        rig.place(vp.position, vp.target);
        rig
    }

    pub fn eye(&self) -> Vec3 {
        self.target + spherical_offset(self.radius, self.polar, self.azimuth)
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn is_flying(&self) -> bool {
        self.fly.is_some()
    }

    /// Starts a tween of eye and target towards `view`'s viewpoint.
    pub fn fly_to(&mut self, view: View, now_sec: f32) {
        self.delta_polar = 0.0;
        self.delta_azimuth = 0.0;
        self.fly = Some(FlyTo {
            from_eye: self.eye(),
            from_target: self.target,
            to: view.viewpoint(),
            start_sec: now_sec,
        });
    }

    /// Drag rotation in canvas pixels. Ignored while a fly-to runs.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height_px: f32) {
        if self.fly.is_some() {
            return;
        }
        let h = viewport_height_px.max(1.0);
        self.delta_azimuth -= TAU * dx_px / h;
        self.delta_polar -= TAU * dy_px / h;
    }

    /// Wheel zoom; negative `delta_y` moves closer.
    pub fn zoom(&mut self, delta_y: f32) {
        if self.fly.is_some() || delta_y == 0.0 {
            return;
        }
        let scale = if delta_y < 0.0 {
            ORBIT_ZOOM_STEP
        } else {
            1.0 / ORBIT_ZOOM_STEP
        };
        self.radius = (self.radius * scale).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    /// Steps the tween or the damped orbit and returns `(eye, target)`.
    pub fn update(&mut self, now_sec: f32) -> (Vec3, Vec3) {
        if let Some(fly) = self.fly {
            let t = ((now_sec - fly.start_sec) / VIEW_TWEEN_SEC).clamp(0.0, 1.0);
            let k = Ease::Power3InOut.apply(t);
            let eye = fly.from_eye.lerp(fly.to.position, k);
            let target = fly.from_target.lerp(fly.to.target, k);
            self.place(eye, target);
            if t >= 1.0 {
                self.fly = None;
            }
            return (self.eye(), self.target);
        }

        self.azimuth += self.delta_azimuth * ORBIT_DAMPING;
        self.polar =
            (self.polar + self.delta_polar * ORBIT_DAMPING).clamp(MIN_POLAR, ORBIT_MAX_POLAR);
        self.delta_azimuth *= 1.0 - ORBIT_DAMPING;
        self.delta_polar *= 1.0 - ORBIT_DAMPING;
        (self.eye(), self.target)
    }

    fn place(&mut self, eye: Vec3, target: Vec3) {
        let offset = eye - target;
        self.target = target;
        self.radius = offset.length().max(1e-4);
        self.polar = (offset.y / self.radius).clamp(-1.0, 1.0).acos();
        self.azimuth = offset.x.atan2(offset.z);
    }
}

#[inline]
fn spherical_offset(radius: f32, polar: f32, azimuth: f32) -> Vec3 {
    let s = polar.sin();
    Vec3::new(
        radius * s * azimuth.sin(),
        radius * polar.cos(),
        radius * s * azimuth.cos(),
    )
}
