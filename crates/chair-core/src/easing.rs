use std::f32::consts::TAU;

/// Easing curves used by the camera and model tweens. `Power2` is cubic and
/// `Power3` quartic, matching the usual animation-library naming.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3InOut,
    /// Overshooting spring; `amplitude >= 1`, `period` in progress units.
    ElasticOut { amplitude: f32, period: f32 },
}

impl Ease {
    /// Maps progress `t` (clamped to 0..=1) to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2In => t.powi(3),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => in_out(t, 3),
            Ease::Power3InOut => in_out(t, 4),
            Ease::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

#[inline]
fn in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(power)
    } else {
        1.0 - 0.5 * (2.0 - 2.0 * t).powi(power)
    }
}

fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    if t <= 0.0 {
        return 0.0;
    }
    let amp = amplitude.max(1.0);
    let period = period.max(1e-3);
    let phase = period / TAU * (1.0 / amp).asin();
    amp * 2f32.powf(-10.0 * t) * ((t - phase) * TAU / period).sin() + 1.0
}

/// Exact at both ends: `lerp(a, b, 1.0) == b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
