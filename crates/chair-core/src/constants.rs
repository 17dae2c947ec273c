use std::time::Duration;

// Shared timing/scene tuning constants used by the core and the web frontend.

// Idle detection
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(5000); // quiet period before auto-rotate
pub const VIEW_INTERVAL: Duration = Duration::from_millis(4000); // time between idle view changes

// Preset transition phases
pub const TRANSITION_EXIT: Duration = Duration::from_millis(600);
pub const TRANSITION_ENTER: Duration = Duration::from_millis(600);

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const VIEW_TWEEN_SEC: f32 = 1.5; // camera fly-to duration between viewpoints

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;
// keep the camera above the floor
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::FRAC_PI_2 - 0.05;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // radius factor per wheel notch

// Model motion
pub const MOTION_TRANSITION_SEC: f32 = 0.6; // visual length of the exit/enter motions
pub const MOTION_OFFSTAGE_X: f32 = 5.0; // how far the chair slides out during a preset change
pub const MOTION_TRANSITION_SCALE: f32 = 0.8;

// Scene layout
pub const FLOOR_Y: f32 = -0.6;
pub const FLOOR_HALF_EXTENT: f32 = 25.0;
