// Host-side tests for easing curves, timelines and model motion.

use chair_core::*;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn eases_hit_their_endpoints() {
    let eases = [
        Ease::Linear,
        Ease::Power2In,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3InOut,
        Ease::ElasticOut {
            amplitude: 1.0,
            period: 0.6,
        },
    ];
    for ease in eases {
        assert!(close(ease.apply(0.0), 0.0), "{ease:?} at 0");
        assert!(close(ease.apply(1.0), 1.0), "{ease:?} at 1");
        assert!(close(ease.apply(-3.0), 0.0), "{ease:?} below 0");
        assert!(close(ease.apply(7.0), 1.0), "{ease:?} above 1");
    }
}

#[test]
fn in_out_curves_are_symmetric_about_the_midpoint() {
    for ease in [Ease::Power2InOut, Ease::Power3InOut] {
        assert!(close(ease.apply(0.5), 0.5));
        for t in [0.1, 0.25, 0.4] {
            assert!(close(ease.apply(t) + ease.apply(1.0 - t), 1.0));
        }
    }
}

#[test]
fn power_curves_are_monotonic() {
    for ease in [Ease::Power2In, Ease::Power2Out, Ease::Power3InOut] {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn elastic_out_overshoots() {
    let ease = Ease::ElasticOut {
        amplitude: 1.0,
        period: 0.6,
    };
    let peak = (1..100)
        .map(|i| ease.apply(i as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0);
}

#[test]
fn later_segment_takes_over_from_current_value() {
    let timeline = Timeline::new(
        ModelTransform::default(),
        vec![
            Segment::to(Channel::PositionX, 0.0, 2.0, 2.0, Ease::Linear),
            Segment::to(Channel::PositionX, 1.0, 1.0, 0.0, Ease::Linear),
        ],
    );
    assert!(close(timeline.sample(0.5).position.x, 0.5));
    // second segment starts from 1.0 (first segment's value at t=1)
    assert!(close(timeline.sample(1.0).position.x, 1.0));
    assert!(close(timeline.sample(1.5).position.x, 0.5));
    assert!(close(timeline.sample(5.0).position.x, 0.0));
    assert!(close(timeline.duration(), 2.0));
}

#[test]
fn untouched_channels_keep_the_initial_value() {
    let initial = ModelTransform {
        position: Vec3::new(1.0, 2.0, 3.0),
        rotation_y: 0.5,
        scale: 2.0,
    };
    let timeline = Timeline::new(
        initial,
        vec![Segment::to(Channel::Scale, 0.0, 1.0, 1.0, Ease::Linear)],
    );
    let mid = timeline.sample(0.5);
    assert_eq!(mid.position, initial.position);
    assert!(close(mid.rotation_y, 0.5));
    assert!(close(mid.scale, 1.5));
}

#[test]
fn intro_starts_hidden_and_ends_at_rest() {
    let intro = intro_timeline();
    let start = intro.sample(0.0);
    assert!(close(start.scale, 0.0));
    assert!(close(start.position.y, -3.0));
    assert!(close(start.rotation_y, -TAU));

    assert!(close(intro.duration(), 3.4));
    let end = intro.sample(intro.duration());
    assert_eq!(end.position, Vec3::ZERO);
    assert!(close(end.rotation_y, 0.0));
    assert!(close(end.scale, 1.0));
}

#[test]
fn intro_reports_completion_exactly_once() {
    let mut motion = ModelMotion::with_intro(10.0);
    assert!(motion.in_intro());
    let mut completions = 0;
    let mut t = 10.0;
    while t < 20.0 {
        if motion.update(t) {
            completions += 1;
            assert!(t >= 13.4 - 1e-3);
        }
        t += 1.0 / 60.0;
    }
    assert_eq!(completions, 1);
    assert!(!motion.in_intro());
    assert_eq!(motion.transform(), ModelTransform::default());
}

#[test]
fn transitions_are_ignored_during_the_intro() {
    let mut motion = ModelMotion::with_intro(0.0);
    motion.update(1.0);
    let before = motion.transform();
    motion.on_direction(Some(TransitionDirection::Out), 1.0);
    assert!(motion.in_intro());
    assert_eq!(motion.transform(), before);
}

#[test]
fn exit_slides_right_and_enter_returns_to_rest() {
    let mut motion = ModelMotion::resting();
    motion.on_direction(Some(TransitionDirection::Out), 0.0);
    assert!(!motion.update(0.6));
    let out = motion.transform();
    assert!(close(out.position.x, MOTION_OFFSTAGE_X));
    assert!(close(out.rotation_y, TAU));
    assert!(close(out.scale, MOTION_TRANSITION_SCALE));

    motion.on_direction(Some(TransitionDirection::In), 0.6);
    let entering = motion.transform();
    assert!(close(entering.position.x, -MOTION_OFFSTAGE_X));
    assert!(close(entering.rotation_y, -PI));

    motion.update(0.9);
    let mid = motion.transform();
    assert!(mid.position.x > -MOTION_OFFSTAGE_X && mid.position.x < 0.0);

    assert!(!motion.update(1.3));
    assert_eq!(motion.transform(), ModelTransform::default());
}

#[test]
fn clearing_the_direction_leaves_the_model_alone() {
    let mut motion = ModelMotion::resting();
    motion.on_direction(None, 0.0);
    assert!(!motion.update(1.0));
    assert_eq!(motion.transform(), ModelTransform::default());
}

#[test]
fn transform_matrix_applies_scale_rotation_translation() {
    let xf = ModelTransform {
        position: Vec3::new(1.0, 0.0, 0.0),
        rotation_y: PI / 2.0,
        scale: 2.0,
    };
    let p = xf.matrix().transform_point3(Vec3::X);
    // +X rotated a quarter turn about Y points to -Z
    assert!((p - Vec3::new(1.0, 0.0, -2.0)).length() < 1e-4);
}
