//! Model motion: the intro entrance and the exit/enter motions played around
//! a preset swap.
//!
//! A [`Timeline`] is a set of per-channel segments. When segments on one
//! channel overlap the most recently started one wins, and a segment without
//! an explicit start value picks up wherever the channel was when it began.

use crate::constants::{MOTION_OFFSTAGE_X, MOTION_TRANSITION_SCALE, MOTION_TRANSITION_SEC};
use crate::easing::{lerp, Ease};
use crate::transition::TransitionDirection;
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: f32,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }
}

impl ModelTransform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.rotation_y),
            self.position,
        )
    }

    fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::PositionX => self.position.x,
            Channel::PositionY => self.position.y,
            Channel::RotationY => self.rotation_y,
            Channel::Scale => self.scale,
        }
    }

    fn set(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::PositionX => self.position.x = value,
            Channel::PositionY => self.position.y = value,
            Channel::RotationY => self.rotation_y = value,
            Channel::Scale => self.scale = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    PositionX,
    PositionY,
    RotationY,
    Scale,
}

const CHANNELS: [Channel; 4] = [
    Channel::PositionX,
    Channel::PositionY,
    Channel::RotationY,
    Channel::Scale,
];

#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub channel: Channel,
    pub start: f32,
    pub duration: f32,
    pub from: Option<f32>,
    pub to: f32,
    pub ease: Ease,
}

impl Segment {
    pub fn to(channel: Channel, start: f32, duration: f32, to: f32, ease: Ease) -> Self {
        Self {
            channel,
            start,
            duration,
            from: None,
            to,
            ease,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Timeline {
    initial: ModelTransform,
    segments: Vec<Segment>,
}

impl Timeline {
    /// Segments are kept ordered by start time; equal starts keep insertion order.
    pub fn new(initial: ModelTransform, mut segments: Vec<Segment>) -> Self {
        segments.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { initial, segments }
    }

    pub fn duration(&self) -> f32 {
        self.segments
            .iter()
            .map(|s| s.start + s.duration)
            .fold(0.0, f32::max)
    }

    pub fn sample(&self, t: f32) -> ModelTransform {
        let mut out = self.initial;
        for channel in CHANNELS {
            out.set(channel, self.sample_channel(channel, t, self.segments.len()));
        }
        out
    }

    /// Value of `channel` at `t` considering only `segments[..limit]`.
    fn sample_channel(&self, channel: Channel, t: f32, limit: usize) -> f32 {
        let found = self.segments[..limit]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, s)| s.channel == channel && s.start <= t);
        let Some((idx, seg)) = found else {
            return self.initial.get(channel);
        };
        let from = seg
            .from
            .unwrap_or_else(|| self.sample_channel(channel, seg.start, idx));
        let progress = if seg.duration > 0.0 {
            (t - seg.start) / seg.duration
        } else {
            1.0
        };
        lerp(from, seg.to, seg.ease.apply(progress))
    }
}

/// Entrance: rises from below while scaling up and spinning, then settles.
pub fn intro_timeline() -> Timeline {
    let initial = ModelTransform {
        position: Vec3::new(0.0, -3.0, 0.0),
        rotation_y: -TAU,
        scale: 0.0,
    };
    let elastic = Ease::ElasticOut {
        amplitude: 1.0,
        period: 0.6,
    };
    Timeline::new(
        initial,
        vec![
            Segment::to(Channel::Scale, 0.0, 2.5, 1.05, elastic),
            Segment::to(Channel::PositionY, 0.0, 2.2, 0.15, Ease::Power2Out),
            Segment::to(Channel::RotationY, 0.0, 2.5, PI * 0.3, Ease::Power2Out),
            Segment::to(Channel::Scale, 2.2, 0.8, 1.0, Ease::Power2InOut),
            Segment::to(Channel::PositionY, 2.2, 0.6, 0.0, Ease::Power2Out),
            Segment::to(Channel::RotationY, 2.4, 1.0, 0.0, Ease::Power2InOut),
        ],
    )
}

/// Spin and slide out to the right from wherever the model is.
pub fn exit_timeline(from: ModelTransform) -> Timeline {
    let d = MOTION_TRANSITION_SEC;
    Timeline::new(
        from,
        vec![
            Segment::to(Channel::RotationY, 0.0, d, TAU, Ease::Power2In),
            Segment::to(Channel::PositionX, 0.0, d, MOTION_OFFSTAGE_X, Ease::Power2In),
            Segment::to(Channel::Scale, 0.0, d, MOTION_TRANSITION_SCALE, Ease::Power2In),
        ],
    )
}

/// Snap to the left and spin back in to rest.
pub fn enter_timeline(from: ModelTransform) -> Timeline {
    let d = MOTION_TRANSITION_SEC;
    let initial = ModelTransform {
        position: Vec3::new(-MOTION_OFFSTAGE_X, from.position.y, from.position.z),
        rotation_y: -PI,
        scale: MOTION_TRANSITION_SCALE,
    };
    Timeline::new(
        initial,
        vec![
            Segment::to(Channel::RotationY, 0.0, d, 0.0, Ease::Power2Out),
            Segment::to(Channel::PositionX, 0.0, d, 0.0, Ease::Power2Out),
            Segment::to(Channel::Scale, 0.0, d, 1.0, Ease::Power2Out),
        ],
    )
}

#[derive(Clone, Debug)]
enum Playing {
    Intro,
    Transition,
    Rest,
}

/// Drives the model transform frame by frame.
#[derive(Clone, Debug)]
pub struct ModelMotion {
    playing: Playing,
    timeline: Option<(Timeline, f32)>,
    current: ModelTransform,
}

impl ModelMotion {
    /// Starts with the intro queued at `now_sec`.
    pub fn with_intro(now_sec: f32) -> Self {
        let timeline = intro_timeline();
        Self {
            current: timeline.sample(0.0),
            playing: Playing::Intro,
            timeline: Some((timeline, now_sec)),
        }
    }

    /// Model already at rest; no intro.
    pub fn resting() -> Self {
        Self {
            playing: Playing::Rest,
            timeline: None,
            current: ModelTransform::default(),
        }
    }

    pub fn transform(&self) -> ModelTransform {
        self.current
    }

    pub fn in_intro(&self) -> bool {
        matches!(self.playing, Playing::Intro)
    }

    /// Reacts to a transition direction change. Ignored during the intro.
    pub fn on_direction(&mut self, direction: Option<TransitionDirection>, now_sec: f32) {
        if self.in_intro() {
            return;
        }
        let timeline = match direction {
            Some(TransitionDirection::Out) => exit_timeline(self.current),
            Some(TransitionDirection::In) => enter_timeline(self.current),
            None => return,
        };
        self.current = timeline.sample(0.0);
        self.timeline = Some((timeline, now_sec));
        self.playing = Playing::Transition;
    }

    /// Samples the active timeline. Returns `true` exactly once, on the frame
    /// the intro finishes.
    pub fn update(&mut self, now_sec: f32) -> bool {
        let Some((timeline, start)) = &self.timeline else {
            return false;
        };
        let t = (now_sec - start).max(0.0);
        self.current = timeline.sample(t);
        if t < timeline.duration() {
            return false;
        }
        self.timeline = None;
        let intro_done = self.in_intro();
        self.playing = Playing::Rest;
        intro_done
    }
}
